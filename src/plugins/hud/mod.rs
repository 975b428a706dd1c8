//! HUD (render-only): fire level, fire rate, live projectile count, plus a
//! static key-binding reference.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::projectiles::components::LiveCount;
use crate::plugins::projectiles::fire::FireControl;

#[derive(Component)]
struct HudText;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(Update, update_hud.run_if(in_state(GameState::InGame)));
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("Hud"),
        HudText,
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("HudHelp"),
        Text::new("Space - shoot\nQ/E - fire level\nZ/X - fire rate"),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        DespawnOnExit(GameState::InGame),
    ));
}

fn update_hud(
    control: Res<FireControl>,
    live: Res<LiveCount>,
    mut q_text: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    text.0 = format!(
        "FireLevel - {}\nFireRate - {}\nPoolCount - {}",
        control.level(),
        control.rate(),
        live.0
    );
}
