//! Library entry point.
//!
//! The binary is a thin shell; integration tests in `tests/` compile as
//! separate crates and import the game through this public surface.

pub mod common;
pub mod game;
pub mod plugins;
