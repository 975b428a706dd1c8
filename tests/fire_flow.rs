//! End-to-end fire pipeline, headless.
//!
//! Time is driven through `Time<Virtual>::advance_by`, so each `update`
//! sees the manual delta plus a few microseconds of real scheduler time —
//! assertions therefore stay away from exact-boundary timings.

mod common;

use std::time::Duration;

use bevy::prelude::*;

use skyfire::common::kinematics::Position;
use skyfire::plugins::emitter::{Emitter, EmitterInput};
use skyfire::plugins::projectiles::components::{LiveCount, PooledProjectile, SlotState};
use skyfire::plugins::projectiles::fire::FireControl;
use skyfire::plugins::projectiles::messages::FireCommand;
use skyfire::plugins::projectiles::pool::ProjectilePool;

fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

fn active_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<&SlotState, With<PooledProjectile>>()
        .iter(app.world())
        .filter(|s| **s == SlotState::Active)
        .count()
}

#[test]
fn volley_fires_after_gate_opens_and_projectiles_retire() {
    let mut app = common::app_headless();
    app.update(); // OnEnter spawns + pool init

    // Default rate 2 -> interval 0.5 s. Accumulate well past it.
    advance(&mut app, 0.3);
    advance(&mut app, 0.3);
    advance(&mut app, 0.3);

    app.world_mut().write_message(FireCommand::Fire);
    advance(&mut app, 0.001);
    assert_eq!(active_count(&mut app), 1);
    assert_eq!(app.world().resource::<LiveCount>().0, 1);

    // A second request straight away finds the gate spent.
    app.world_mut().write_message(FireCommand::Fire);
    advance(&mut app, 0.01);
    assert_eq!(active_count(&mut app), 1);

    // The shot starts at y = 360 - 32 = 328 and climbs at 600 px/s; well
    // inside two seconds it crosses the top edge and the slot recycles.
    for _ in 0..20 {
        advance(&mut app, 0.1);
    }
    assert_eq!(active_count(&mut app), 0);
    assert_eq!(app.world().resource::<LiveCount>().0, 0);
}

#[test]
fn pool_pressure_degrades_volley_softly() {
    let mut app = common::app_headless();
    app.update();

    // Occupy all but two slots, parked mid-field with zero velocity so the
    // integrator keeps them alive.
    let slots = app.world().resource::<ProjectilePool>().slots.clone();
    for &slot in slots.iter().take(48) {
        *app.world_mut().get_mut::<SlotState>(slot).unwrap() = SlotState::Active;
        app.world_mut().get_mut::<Position>(slot).unwrap().0 = Vec2::new(100.0, 500.0);
    }

    // Level up to 4 and open the gate.
    for _ in 0..3 {
        app.world_mut().write_message(FireCommand::LevelUp);
    }
    advance(&mut app, 0.6);
    advance(&mut app, 0.6);
    assert_eq!(app.world().resource::<FireControl>().level(), 4);

    app.world_mut().write_message(FireCommand::Fire);
    advance(&mut app, 0.001);

    // Four requested, two granted: the pool is full, nothing overflowed.
    assert_eq!(active_count(&mut app), 50);
    assert_eq!(app.world().resource::<LiveCount>().0, 50);
}

#[test]
fn emitter_accelerates_clamps_and_comes_to_rest() {
    let mut app = common::app_headless();
    app.update();

    // Hold "right" long enough to pin the ship against the playfield edge.
    app.world_mut().insert_resource(EmitterInput {
        right: true,
        ..Default::default()
    });
    for _ in 0..40 {
        advance(&mut app, 0.2);
    }

    let pos = app
        .world_mut()
        .query_filtered::<&Position, With<Emitter>>()
        .single(app.world())
        .unwrap()
        .0;
    assert_eq!(pos.x, 1248.0); // 1280 - half the 64 px sprite
    assert_eq!(pos.y, 360.0);

    // Release: friction eases the ship to rest within a second.
    app.world_mut().insert_resource(EmitterInput::default());
    for _ in 0..10 {
        advance(&mut app, 0.2);
    }

    let vel = app
        .world_mut()
        .query_filtered::<&skyfire::common::kinematics::Velocity, With<Emitter>>()
        .single(app.world())
        .unwrap()
        .0;
    assert_eq!(vel, Vec2::ZERO);
}
