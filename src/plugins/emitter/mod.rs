//! Emitter (player ship) plugin.
//!
//! Pipeline (Update schedule, one pass per frame):
//! - `gather_input`: sample held movement keys into `EmitterInput`
//! - `apply_motion`: accelerate / ease / clamp, then integrate position
//!
//! Motion is per-axis: acceleration accumulates while a direction is held,
//! and an axis with no held direction eases back toward rest with a bounded
//! step that never overshoots past zero.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::kinematics::{Position, Velocity, approach};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component)]
pub struct Emitter;

/// Held movement axes, resolved once per frame by `gather_input`.
///
/// Headless worlds have no keyboard; tests write this resource directly.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct EmitterInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(EmitterInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (gather_input, apply_motion.after(gather_input))
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("Emitter"),
        Emitter,
        Position(tunables.playfield * 0.5),
        Velocity(Vec2::ZERO),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(tunables.emitter_size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<EmitterInput>) {
    let Some(keys) = keys else {
        return;
    };

    input.left = keys.pressed(KeyCode::KeyA);
    input.right = keys.pressed(KeyCode::KeyD);
    input.up = keys.pressed(KeyCode::KeyW);
    input.down = keys.pressed(KeyCode::KeyS);
}

pub fn apply_motion(
    time: Res<Time>,
    tunables: Res<Tunables>,
    input: Res<EmitterInput>,
    mut q_emitter: Query<(&mut Position, &mut Velocity), With<Emitter>>,
) {
    let Ok((mut pos, mut vel)) = q_emitter.single_mut() else {
        return;
    };

    let dt = time.delta_secs();

    // Screen space: up is -y.
    if input.left {
        vel.0.x -= tunables.acceleration * dt;
    }
    if input.right {
        vel.0.x += tunables.acceleration * dt;
    }
    if input.up {
        vel.0.y -= tunables.acceleration * dt;
    }
    if input.down {
        vel.0.y += tunables.acceleration * dt;
    }

    if !input.left && !input.right {
        vel.0.x = approach(vel.0.x, 0.0, tunables.friction * dt);
    }
    if !input.up && !input.down {
        vel.0.y = approach(vel.0.y, 0.0, tunables.friction * dt);
    }

    if vel.0.length() > tunables.max_speed {
        vel.0 = vel.0.normalize() * tunables.max_speed;
    }

    pos.0 += vel.0 * dt;

    // Keep the whole sprite on the playfield, not just its centre.
    let half = tunables.emitter_size * 0.5;
    pos.0 = pos.0.clamp(half, tunables.playfield - half);
}
