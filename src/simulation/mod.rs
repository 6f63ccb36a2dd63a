//! Standalone road runner simulation
//!
//! This module contains all the core game logic (road generation, scrolling,
//! collision, scoring) and runs independently of the Bevy game engine. It can
//! be driven from the console without booting up the full game.

mod autopilot;
mod collision;
mod config;
mod game_state;
mod generator;
mod scroll;
mod segment_sequence;
mod stats;
mod types;
mod world;

// Re-export public types for external use
pub use autopilot::{Autopilot, AUTOPILOT_DEAD_ZONE};
pub use collision::{check_collision, far_segment_reached};
pub use config::{
    GameConfig, BASE_SCROLL_SPEED, CAR_HEIGHT, CAR_SPEED_HORIZONTAL, CAR_WIDTH,
    COLLISION_TOLERANCE, MAX_ROAD_WIDTH, MIN_GAP_WIDTH, MIN_ROAD_WIDTH, RUNWAY_HEIGHT_FACTOR,
    RUNWAY_WIDTH_FACTOR, SCREEN_HEIGHT, SCREEN_WIDTH, SCROLL_ACCEL_PER_TICK, SCROLL_SPEED_CAP,
    VISIBLE_SEGMENT_COUNT,
};
pub use game_state::{GameState, Phase};
pub use generator::{generate_segment, runway_segment};
pub use scroll::{ScrollEngine, SpeedController};
pub use segment_sequence::SegmentSequence;
pub use stats::RunStats;
pub use types::{Car, Position, Segment, SegmentEdges, Steer};
pub use world::{FrameInput, RunnerWorld, TickOutcome};
