//! Fire patterns: spawn geometry per fire level.
//!
//! A pattern is a pure function of the fire level, the emitter sprite size
//! and the projectile speed. Offsets are relative to the emitter anchor in
//! screen space (+y down), so "above the ship" is negative y.

use bevy::prelude::*;
use thiserror::Error;

pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 5;

/// The fire controller clamps levels to `[LEVEL_MIN, LEVEL_MAX]` before
/// asking for a pattern, so reaching this is a bug upstream. It is still an
/// explicit error: a level without a pattern must fail closed, never hand
/// back an empty pattern for position math to index.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no fire pattern for level {0} (valid levels: 1..=5)")]
pub struct InvalidLevel(pub u8);

/// Spawn geometry for one fire level.
///
/// Invariant: `offsets.len() == directions.len() == level`.
#[derive(Debug, Clone, PartialEq)]
pub struct FirePattern {
    /// Spawn points relative to the emitter anchor, one per projectile.
    pub offsets: Vec<Vec2>,
    /// Spawn velocities, index-matched with `offsets`.
    pub directions: Vec<Vec2>,
}

impl FirePattern {
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Build the pattern for `level`.
///
/// Levels 1-3 fire straight up; levels 4-5 fan outward with fixed
/// horizontal components. Offsets scale with the emitter sprite, so wider
/// ships spread their volley wider.
pub fn fire_pattern(
    level: u8,
    emitter_size: Vec2,
    speed: f32,
) -> Result<FirePattern, InvalidLevel> {
    let w = emitter_size.x;
    let h = emitter_size.y;
    let up = Vec2::new(0.0, -speed);

    let (offsets, directions) = match level {
        1 => (vec![Vec2::new(0.0, -h / 2.0)], vec![up]),
        2 => (
            vec![
                Vec2::new(-w / 3.0, -h / 2.0),
                Vec2::new(w / 3.0, -h / 2.0),
            ],
            vec![up, up],
        ),
        3 => (
            // Centre shot spawns a full sprite-height up, slightly ahead of
            // its wingmen.
            vec![
                Vec2::new(-w / 3.0, -h / 2.0),
                Vec2::new(0.0, -h),
                Vec2::new(w / 3.0, -h / 2.0),
            ],
            vec![up, up, up],
        ),
        4 => (
            vec![
                Vec2::new(-w / 2.0, -h / 2.0),
                Vec2::new(-w / 4.0, -h / 2.0),
                Vec2::new(w / 4.0, -h / 2.0),
                Vec2::new(w / 2.0, -h / 2.0),
            ],
            vec![
                Vec2::new(-200.0, -speed),
                Vec2::new(-100.0, -speed),
                Vec2::new(100.0, -speed),
                Vec2::new(200.0, -speed),
            ],
        ),
        5 => (
            vec![
                Vec2::new(-w / 2.0, -h / 2.0),
                Vec2::new(-w / 4.0, -h / 2.0),
                Vec2::new(0.0, -h / 2.0),
                Vec2::new(w / 4.0, -h / 2.0),
                Vec2::new(w / 2.0, -h / 2.0),
            ],
            vec![
                Vec2::new(-200.0, -speed),
                Vec2::new(-100.0, -speed),
                up,
                Vec2::new(100.0, -speed),
                Vec2::new(200.0, -speed),
            ],
        ),
        other => return Err(InvalidLevel(other)),
    };

    debug_assert_eq!(offsets.len(), directions.len());
    Ok(FirePattern { offsets, directions })
}
