//! Buffered fire commands.
//!
//! Producers only enqueue intent; the fire controller is the single
//! consumer, and the only writer of `FireControl` and the pool slots.
//! This is a producer → queue → consumer pipeline and keeps all pool
//! mutation in one place.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireCommand {
    /// Request a volley this frame. Dropped, not queued, while the gate is
    /// shut.
    Fire,
    RateUp,
    RateDown,
    LevelUp,
    LevelDown,
}
