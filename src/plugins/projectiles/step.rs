//! Per-frame integration and retirement of live projectiles.

use bevy::prelude::*;

use crate::common::kinematics::{Position, Velocity};

use super::components::{LiveCount, PooledProjectile, SlotState};

/// Advance every active slot by `velocity * dt`, then retire slots whose
/// move carried them past the top edge (`y <= 0`) on this same pass.
/// Retired slots are free for the next allocation. Writes the live count
/// the HUD displays.
pub fn advance_projectiles(
    time: Res<Time>,
    mut live: ResMut<LiveCount>,
    mut q_slots: Query<(&mut SlotState, &mut Position, &Velocity), With<PooledProjectile>>,
) {
    let dt = time.delta_secs();
    let mut count = 0;

    for (mut state, mut pos, vel) in &mut q_slots {
        if *state != SlotState::Active {
            continue;
        }

        pos.0 += vel.0 * dt;

        if pos.0.y <= 0.0 {
            *state = SlotState::Inactive;
        } else {
            count += 1;
        }
    }

    live.0 = count;
}
