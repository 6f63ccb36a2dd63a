//! Startup systems for the camera, the car and the HUD

use bevy::prelude::*;

use super::components::{
    car_sprite_size, CarSprite, HudText, MainCamera, RunnerSettings, RunnerWorldResource,
};
use crate::simulation::RunnerWorld;

const HUD_COLOR: Color = Color::WHITE;
const CAR_COLOR: Color = Color::WHITE;

/// Build the simulation world, or shut down if it cannot be built
pub fn setup_runner(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<RunnerSettings>,
    mut exit: MessageWriter<AppExit>,
) {
    let config = settings.config.clone();
    let now = time.elapsed_secs_f64();
    let world = match settings.seed {
        Some(seed) => RunnerWorld::new_with_seed(config, seed, now),
        None => RunnerWorld::new(config, now),
    };

    match world {
        Ok(world) => {
            info!("Road ready with {} segments", world.sequence().len());
            commands.insert_resource(RunnerWorldResource(world));
        }
        Err(e) => {
            error!("Failed to start the game: {:#}", e);
            exit.write(AppExit::error());
        }
    }
}

/// System to setup the camera, car sprite and HUD text
///
/// Runs after `setup_runner` so the car is sized from the world's own config.
pub fn setup_world(mut commands: Commands, runner: Option<Res<RunnerWorldResource>>) {
    let Some(runner) = runner else {
        return;
    };

    commands.spawn((MainCamera, Camera2d));
    commands.spawn((
        CarSprite,
        Sprite::from_color(CAR_COLOR, car_sprite_size(runner.0.config())),
        Transform::default(),
    ));

    commands.spawn((
        HudText::Score,
        Text::new("Score : 0"),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(HUD_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));

    commands.spawn((
        HudText::HighScore,
        Text::new("High Score : 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(HUD_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));

    commands
        .spawn((
            HudText::PausePanel,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|panel| {
            panel.spawn((
                HudText::PauseScore,
                Text::new("Score : 0"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(HUD_COLOR),
            ));
            panel.spawn((
                Text::new("Press 'Space' to Play Again."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(HUD_COLOR),
            ));
        });
}
