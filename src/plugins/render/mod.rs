//! Presentation sync (render-only): simulation facts → drawable state.
//!
//! The simulation runs in screen space (origin top-left, +y down); Bevy
//! renders in world space (origin at the camera, +y up). This module is
//! the only place that conversion lives. It also derives slot visibility
//! from slot state, so gameplay never touches `Visibility` either.

use bevy::prelude::*;

use crate::common::kinematics::Position;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::SlotState;

pub fn plugin(app: &mut App) {
    app.add_systems(
        PostUpdate,
        (sync_transforms, sync_visibility).run_if(in_state(GameState::InGame)),
    );
}

/// Screen space (top-left origin, +y down) → world space (centred, +y up).
fn screen_to_world(p: Vec2, playfield: Vec2) -> Vec2 {
    Vec2::new(p.x - playfield.x * 0.5, playfield.y * 0.5 - p.y)
}

fn sync_transforms(tunables: Res<Tunables>, mut q: Query<(&Position, &mut Transform)>) {
    for (pos, mut tf) in &mut q {
        let world = screen_to_world(pos.0, tunables.playfield);
        tf.translation.x = world.x;
        tf.translation.y = world.y;
    }
}

fn sync_visibility(mut q: Query<(&SlotState, &mut Visibility)>) {
    for (state, mut vis) in &mut q {
        *vis = match state {
            SlotState::Active => Visibility::Visible,
            SlotState::Inactive => Visibility::Hidden,
        };
    }
}
