use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn default_tunables_are_sane() {
    let t = Tunables::default();
    assert!(t.max_speed > 0.0);
    assert!(t.friction > 0.0);
    assert!(t.emitter_size.cmplt(t.playfield).all());
}
