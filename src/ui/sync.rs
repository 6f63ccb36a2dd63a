//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{to_world, CarSprite, HudText, RunnerWorldResource};
use super::input::read_frame_input;

const ROAD_COLOR: Color = Color::WHITE;

/// System to run simulation tick
pub fn tick_simulation(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut runner: ResMut<RunnerWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    let input = read_frame_input(&time, &keyboard);
    if let Err(e) = runner.0.tick(&input) {
        error!("Simulation tick failed: {:#}", e);
        exit.write(AppExit::error());
    }
}

/// Draw every road edge and the connectors between segments
pub fn draw_road(runner: Res<RunnerWorldResource>, mut gizmos: Gizmos) {
    let world = &runner.0;
    let config = world.config();

    for edges in world.sequence().edges() {
        for (start, end) in [edges.left, edges.right] {
            gizmos.line_2d(to_world(start, config), to_world(end, config), ROAD_COLOR);
        }
        if let Some(connectors) = edges.connectors {
            for (start, end) in connectors {
                gizmos.line_2d(to_world(start, config), to_world(end, config), ROAD_COLOR);
            }
        }
    }
}

/// System to sync the car sprite from simulation state
pub fn sync_car(
    runner: Res<RunnerWorldResource>,
    mut car_query: Query<&mut Transform, With<CarSprite>>,
) {
    let world = &runner.0;
    let config = world.config();
    let car = world.car();

    let mut center = car.pos;
    center.x += config.car_width / 2.0;
    center.y += config.car_height / 2.0;
    let translation = to_world(center, config);

    for mut transform in car_query.iter_mut() {
        transform.translation = translation.extend(1.0);
    }
}

/// System to update the score texts and the crash screen
pub fn update_hud(
    time: Res<Time>,
    runner: Res<RunnerWorldResource>,
    mut text_query: Query<(&HudText, &mut Text)>,
    mut visibility_query: Query<(&HudText, &mut Visibility)>,
) {
    let world = &runner.0;
    let now = time.elapsed_secs_f64();
    let paused = world.is_paused();

    for (hud, mut text) in text_query.iter_mut() {
        match hud {
            HudText::Score | HudText::PauseScore => {
                **text = format!("Score : {}", world.score(now) as u64);
            }
            HudText::HighScore => {
                **text = format!("High Score : {}", world.high_score() as u64);
            }
            HudText::PausePanel => {}
        }
    }

    for (hud, mut visibility) in visibility_query.iter_mut() {
        let visible = match hud {
            HudText::Score | HudText::HighScore => !paused,
            HudText::PausePanel => paused,
            HudText::PauseScore => continue,
        };
        *visibility = if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
