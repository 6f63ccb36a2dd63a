//! Input handling systems

use bevy::prelude::*;

use crate::simulation::{FrameInput, Steer};

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Left wins when both directions are held
pub fn read_steer(keyboard: &ButtonInput<KeyCode>) -> Steer {
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        Steer::Left
    } else if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        Steer::Right
    } else {
        Steer::None
    }
}

/// Collect this frame's clock and keyboard readings for the simulation
pub fn read_frame_input(time: &Time, keyboard: &ButtonInput<KeyCode>) -> FrameInput {
    FrameInput {
        now: time.elapsed_secs_f64(),
        dt: time.delta_secs(),
        steer: read_steer(keyboard),
        restart: keyboard.just_pressed(KeyCode::Space),
    }
}
