//! Fixed-capacity projectile pool.
//!
//! Slots are pre-spawned once and recycled, never despawned. The pool
//! resource keeps the slot entities in fixed index order and allocation
//! scans that order ascending, so slot reuse is deterministic and testable.
//! A free-index stack would make allocation O(1), but at 50 slots the
//! linear walk is not worth the bookkeeping.

use bevy::prelude::*;

use crate::common::kinematics::{Position, Velocity};

use super::components::{PatternIndex, PooledProjectile, SlotState};
use super::pattern::FirePattern;

pub const POOL_CAPACITY: usize = 50;

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    /// Slot entities in fixed index order. Filled at startup, never grows.
    pub slots: Vec<Entity>,
    pub capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }
}

/// Query shape for mutating slots; shared by the fire controller and tests.
pub type SlotQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut SlotState,
        &'static mut Position,
        &'static mut Velocity,
        &'static mut PatternIndex,
    ),
    With<PooledProjectile>,
>;

/// Pre-spawn the pool (all slots inactive).
pub fn init_pool(mut commands: Commands, mut pool: ResMut<ProjectilePool>) {
    pool.slots.clear();
    let cap = pool.capacity;
    pool.slots.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                SlotState::Inactive,
                Position(Vec2::ZERO),
                Velocity(Vec2::ZERO),
                PatternIndex(0),
                Sprite {
                    color: Color::srgb(1.0, 0.85, 0.3),
                    custom_size: Some(Vec2::splat(8.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
            ))
            .id();

        pool.slots.push(e);
    }
}

/// Activate slots for a volley fired from `origin`.
///
/// Scans slots in ascending index order; each free slot takes the next
/// offset/direction pair until the pattern is exhausted or no free slot
/// remains. Returns the count actually activated — fewer than the pattern
/// wanted is a capacity decision under pool pressure, not an error.
pub fn allocate(
    pool: &ProjectilePool,
    q_slots: &mut SlotQuery,
    origin: Vec2,
    pattern: &FirePattern,
) -> usize {
    let mut k = 0;

    for &slot in &pool.slots {
        if k == pattern.len() {
            break;
        }

        let (mut state, mut pos, mut vel, mut index) = q_slots
            .get_mut(slot)
            .expect("ProjectilePool contained an entity missing pooled slot components");

        if *state != SlotState::Inactive {
            continue;
        }

        *state = SlotState::Active;
        pos.0 = origin + pattern.offsets[k];
        vel.0 = pattern.directions[k];
        index.0 = k;
        k += 1;
    }

    k
}
