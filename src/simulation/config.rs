//! Tunable dimensions and speeds for the road runner
//!
//! Every length is in screen pixels with the origin at the top-left corner
//! and y growing downwards. Speeds are in pixels per second.

use anyhow::{ensure, Result};

/// Logical screen size
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 800.0;

/// Size of the player's car
pub const CAR_WIDTH: f32 = 50.0;
pub const CAR_HEIGHT: f32 = 50.0;

/// Bounds for the width of every randomly generated segment
pub const MIN_ROAD_WIDTH: f32 = CAR_WIDTH * 4.0;
pub const MAX_ROAD_WIDTH: f32 = CAR_WIDTH * 6.0;

/// Minimum horizontal overlap between two consecutive segments
pub const MIN_GAP_WIDTH: f32 = CAR_WIDTH * 1.7;

/// Number of segments on screen at once; the sequence holds twice as many
pub const VISIBLE_SEGMENT_COUNT: usize = 3;

/// Pixels the car may overhang a road edge before it counts as a crash
pub const COLLISION_TOLERANCE: f32 = 5.0;

/// Scroll speed progression
pub const BASE_SCROLL_SPEED: f32 = 240.0;
pub const SCROLL_ACCEL_PER_TICK: f32 = 0.06;
pub const SCROLL_SPEED_CAP: f32 = 540.0;

/// Horizontal speed of the car while a steer key is held
pub const CAR_SPEED_HORIZONTAL: f32 = 300.0;

/// Multipliers for the runway segment at the start of every run
pub const RUNWAY_HEIGHT_FACTOR: f32 = 4.0;
pub const RUNWAY_WIDTH_FACTOR: f32 = 2.0;

/// Complete game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub car_width: f32,
    pub car_height: f32,
    pub min_road_width: f32,
    pub max_road_width: f32,
    pub min_gap_width: f32,
    pub visible_segment_count: usize,
    pub collision_tolerance: f32,
    pub base_scroll_speed: f32,
    pub scroll_accel_per_tick: f32,
    pub scroll_speed_cap: f32,
    pub car_speed_horizontal: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            car_width: CAR_WIDTH,
            car_height: CAR_HEIGHT,
            min_road_width: MIN_ROAD_WIDTH,
            max_road_width: MAX_ROAD_WIDTH,
            min_gap_width: MIN_GAP_WIDTH,
            visible_segment_count: VISIBLE_SEGMENT_COUNT,
            collision_tolerance: COLLISION_TOLERANCE,
            base_scroll_speed: BASE_SCROLL_SPEED,
            scroll_accel_per_tick: SCROLL_ACCEL_PER_TICK,
            scroll_speed_cap: SCROLL_SPEED_CAP,
            car_speed_horizontal: CAR_SPEED_HORIZONTAL,
        }
    }
}

impl GameConfig {
    /// Height of a regular segment, a whole number of pixels
    pub fn road_height(&self) -> f32 {
        (self.screen_height / self.visible_segment_count as f32).floor()
    }

    pub fn runway_width(&self) -> f32 {
        self.min_road_width * RUNWAY_WIDTH_FACTOR
    }

    pub fn runway_height(&self) -> f32 {
        self.road_height() * RUNWAY_HEIGHT_FACTOR
    }

    /// Number of segments kept in the sequence at all times
    pub fn sequence_len(&self) -> usize {
        self.visible_segment_count * 2
    }

    /// Distance from a screen edge below which the generator must turn back
    pub fn edge_margin(&self) -> f32 {
        self.max_road_width - self.min_gap_width
    }

    /// Fixed vertical position of the car's top edge
    pub fn car_y(&self) -> f32 {
        self.screen_height - self.car_height
    }

    /// Reject configurations that would make generation or collision unsound
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            "screen must have a positive size, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.car_width > 0.0 && self.car_height > 0.0,
            "car must have a positive size"
        );
        ensure!(
            self.visible_segment_count >= 1,
            "at least one segment must be visible"
        );
        ensure!(
            self.min_road_width.ceil() <= self.max_road_width.floor(),
            "min road width {} exceeds max road width {}",
            self.min_road_width,
            self.max_road_width
        );
        ensure!(
            self.min_gap_width >= self.car_width,
            "gap width {} is narrower than the car ({})",
            self.min_gap_width,
            self.car_width
        );

        // Both placement ranges are drawn between the gap and the previous
        // half width, so the narrowest segment must still leave room.
        ensure!(
            (self.min_road_width / 2.0).floor() >= self.min_gap_width.ceil(),
            "half of the min road width ({}) must cover the gap width ({})",
            self.min_road_width / 2.0,
            self.min_gap_width
        );

        // The car must never span more than the near and far segment.
        ensure!(
            self.road_height() >= self.car_height + self.collision_tolerance,
            "road height {} is too short for car height {} with tolerance {}",
            self.road_height(),
            self.car_height,
            self.collision_tolerance
        );

        // Both clamps firing at once would leave no safe side.
        let widest = self.max_road_width.max(self.runway_width());
        ensure!(
            self.screen_width > 2.0 * self.edge_margin() + widest,
            "screen width {} is too narrow for segments {} wide",
            self.screen_width,
            widest
        );

        ensure!(
            self.base_scroll_speed >= 0.0 && self.scroll_accel_per_tick >= 0.0,
            "scroll speed and acceleration must not be negative"
        );
        ensure!(
            self.base_scroll_speed <= self.scroll_speed_cap,
            "base scroll speed {} exceeds cap {}",
            self.base_scroll_speed,
            self.scroll_speed_cap
        );
        Ok(())
    }
}
