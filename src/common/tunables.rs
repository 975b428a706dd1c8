//! Tunable gameplay constants.

use bevy::prelude::*;

/// Gameplay constants, inserted once by the core plugin.
///
/// Distances are screen pixels, speeds are pixels per second.
#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub acceleration: f32,
    pub friction: f32,
    pub max_speed: f32,
    pub projectile_speed: f32,
    /// Emitter sprite size; fire patterns scale their spread with it.
    pub emitter_size: Vec2,
    /// Playfield rectangle, anchored at the top-left corner.
    pub playfield: Vec2,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            acceleration: 1500.0,
            friction: 800.0,
            max_speed: 800.0,
            projectile_speed: 600.0,
            emitter_size: Vec2::new(64.0, 64.0),
            playfield: Vec2::new(1280.0, 720.0),
        }
    }
}
