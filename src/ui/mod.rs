//! UI module that renders the game using Bevy
//!
//! This module is purely for presentation and input - all game logic is in
//! the `simulation` module. The UI feeds keyboard and clock readings into
//! `RunnerWorld` and draws the state it exposes.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

use crate::simulation::GameConfig;

pub use components::{car_sprite_size, to_world, RunnerSettings, RunnerWorldResource};

use input::handle_input;
use sync::{draw_road, sync_car, tick_simulation, update_hud};
use world::{setup_runner, setup_world};

/// Plugin to register all UI systems
#[derive(Default)]
pub struct RoadRunnerUIPlugin {
    /// Seed for the road generator, random if `None`
    pub seed: Option<u64>,
    pub config: GameConfig,
}

impl Plugin for RoadRunnerUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .insert_resource(RunnerSettings {
                seed: self.seed,
                config: self.config.clone(),
            })
            .add_systems(Startup, (setup_runner, setup_world).chain())
            .add_systems(Update, handle_input)
            .add_systems(
                Update,
                (tick_simulation, (draw_road, sync_car, update_hud))
                    .chain()
                    .run_if(resource_exists::<RunnerWorldResource>),
            );
    }
}
