//! Projectiles plugin: message-based fire pipeline + fixed-capacity pooling.
//!
//! # Data flow (Update schedule, one pass per frame)
//! ```text
//! (A) Producer: gather_fire_commands
//!     - reads: keyboard edges (Space / Z / X / Q / E)
//!     - writes: FireCommand messages
//!
//! (B) Consumer: fire_control (single writer of FireControl + pool slots)
//!     - applies rate/level adjustments, advances the gate timer
//!     - on a gated fire: builds the level's pattern, allocates slots
//!       from the pool in ascending index order
//!
//! (C) Integrator: advance_projectiles
//!     - moves active slots, retires them past the top edge
//!     - writes LiveCount
//! ```
//!
//! Producers never touch the pool; the consumer is the only pool writer.
//! A volley granted fewer slots than its pattern wants is a capacity
//! decision under pool pressure, not an error — the gate is spent either
//! way and the live count simply comes up short.

pub mod components;
pub mod fire;
pub mod messages;
pub mod pattern;
pub mod pool;
pub mod step;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::emitter;

pub struct ProjectilesPlugin;

/// Maintain fire command message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_fire_messages(mut msgs: ResMut<Messages<messages::FireCommand>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        // Pool + pre-spawn
        app.insert_resource(pool::ProjectilePool::new(pool::POOL_CAPACITY))
            .insert_resource(fire::FireControl::default())
            .insert_resource(components::LiveCount::default())
            .add_systems(Startup, pool::init_pool);

        // Message storage for fire commands.
        app.init_resource::<Messages<messages::FireCommand>>();
        app.add_systems(PostUpdate, update_fire_messages);

        // Frame pipeline: input -> emitter motion -> fire -> integrate.
        app.add_systems(
            Update,
            (
                fire::gather_fire_commands,
                fire::fire_control
                    .after(fire::gather_fire_commands)
                    .after(emitter::apply_motion),
                step::advance_projectiles.after(fire::fire_control),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
