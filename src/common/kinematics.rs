//! Screen-space kinematic facts.
//!
//! The simulation runs in screen space: origin at the top-left of the
//! playfield, +y pointing down. Projectiles travel in -y and leave play at
//! y = 0 (the top edge). The render layer maps these facts into Bevy world
//! space; gameplay systems never write `Transform`.

use bevy::prelude::*;

/// Screen-space position in pixels.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position(pub Vec2);

/// Screen-space velocity in pixels per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

/// Move `value` toward `target` by at most `step`, without overshooting.
#[inline]
pub fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}
