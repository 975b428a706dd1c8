mod common;

use bevy::prelude::*;

use skyfire::common::kinematics::Position;
use skyfire::plugins::emitter::Emitter;
use skyfire::plugins::projectiles::components::{PooledProjectile, SlotState};
use skyfire::plugins::projectiles::pool::ProjectilePool;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn boot_spawns_emitter_and_full_idle_pool() {
    let mut app = common::app_headless();
    app.update();

    let emitter_pos = app
        .world_mut()
        .query_filtered::<&Position, With<Emitter>>()
        .single(app.world())
        .expect("exactly one emitter");
    assert_eq!(emitter_pos.0, Vec2::new(640.0, 360.0));

    let pool_len = app.world().resource::<ProjectilePool>().slots.len();
    assert_eq!(pool_len, 50);

    let idle = app
        .world_mut()
        .query_filtered::<&SlotState, With<PooledProjectile>>()
        .iter(app.world())
        .filter(|s| **s == SlotState::Inactive)
        .count();
    assert_eq!(idle, 50);
}
