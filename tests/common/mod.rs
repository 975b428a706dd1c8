//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime and time.
//! - `StatesPlugin` backs the game state machine.
//! - `skyfire::game::configure_headless` installs the gameplay plugins.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    skyfire::game::configure_headless(&mut app);
    app
}
