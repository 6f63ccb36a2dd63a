//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{GameConfig, Position, RunnerWorld};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct RunnerWorldResource(pub RunnerWorld);

/// Options the UI was launched with
#[derive(Resource, Default, Clone)]
pub struct RunnerSettings {
    pub seed: Option<u64>,
    pub config: GameConfig,
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the car sprite
#[derive(Component)]
pub struct CarSprite;

/// HUD elements, updated from the game state every frame
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudText {
    /// Live score, shown while running
    Score,
    /// Best score, shown while running
    HighScore,
    /// Container for the crash screen
    PausePanel,
    /// Frozen score on the crash screen
    PauseScore,
}

/// Convert a screen-space position (origin top-left, y down) to Bevy world space
pub fn to_world(position: Position, config: &GameConfig) -> Vec2 {
    Vec2::new(
        position.x - config.screen_width / 2.0,
        config.screen_height / 2.0 - position.y,
    )
}

/// Sprite size of the car in the given world
pub fn car_sprite_size(config: &GameConfig) -> Vec2 {
    Vec2::new(config.car_width, config.car_height)
}
