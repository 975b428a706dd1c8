use bevy::prelude::*;

/// Marker for pre-spawned pool slots. Slots are recycled, never despawned.
#[derive(Component)]
pub struct PooledProjectile;

/// Lifecycle of one pool slot. Inactive slots are free for reuse.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Inactive,
    Active,
}

/// Which offset/direction pair of the volley's pattern produced this slot
/// (`0..level`).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternIndex(pub usize);

/// Slots still live after the last integration pass. The HUD reads it.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LiveCount(pub usize);
