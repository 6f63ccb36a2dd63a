//! Core types for the road runner
//!
//! These are standalone types that don't depend on Bevy.

use super::config::GameConfig;

/// A 2D point in screen space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One strip of road
///
/// Both top corners share `top_y`; the bottom corners sit `height` below
/// them at the same x coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub top_left_x: f32,
    pub top_right_x: f32,
    pub top_y: f32,
    pub height: f32,
}

impl Segment {
    pub fn new(top_left_x: f32, top_right_x: f32, top_y: f32, height: f32) -> Self {
        Self {
            top_left_x,
            top_right_x,
            top_y,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.top_right_x - self.top_left_x
    }

    pub fn half_width(&self) -> f32 {
        self.width() / 2.0
    }

    pub fn bottom_y(&self) -> f32 {
        self.top_y + self.height
    }

    pub fn center_x(&self) -> f32 {
        (self.top_left_x + self.top_right_x) / 2.0
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.top_left_x, self.top_y)
    }

    pub fn top_right(&self) -> Position {
        Position::new(self.top_right_x, self.top_y)
    }

    pub fn bottom_left(&self) -> Position {
        Position::new(self.top_left_x, self.bottom_y())
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.top_right_x, self.bottom_y())
    }

    /// Width of the horizontal range shared with `other` (negative if disjoint)
    pub fn overlap_with(&self, other: &Segment) -> f32 {
        self.top_right_x.min(other.top_right_x) - self.top_left_x.max(other.top_left_x)
    }
}

/// Player steering for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    Right,
    #[default]
    None,
}

/// The player's car
///
/// The car never moves vertically; the road scrolls underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    /// Top-left corner
    pub pos: Position,
}

impl Car {
    /// Car centred horizontally at the bottom of the screen
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            pos: Position::new(
                (config.screen_width / 2.0 - config.car_width / 2.0).floor(),
                config.car_y(),
            ),
        }
    }

    /// Move horizontally for one tick, staying on screen
    pub fn steer(&mut self, steer: Steer, delta_secs: f32, config: &GameConfig) {
        let step = config.car_speed_horizontal * delta_secs;
        let dx = match steer {
            Steer::Left => -step,
            Steer::Right => step,
            Steer::None => return,
        };
        let max_x = config.screen_width - config.car_width;
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self, config: &GameConfig) -> f32 {
        self.pos.x + config.car_width
    }

    pub fn center_x(&self, config: &GameConfig) -> f32 {
        self.pos.x + config.car_width / 2.0
    }
}

/// Line segments outlining one road segment, in drawing order
///
/// `connectors` joins this segment's bottom corners to the top corners of
/// the segment below it; the bottom-most segment has none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentEdges {
    pub left: (Position, Position),
    pub right: (Position, Position),
    pub connectors: Option<[(Position, Position); 2]>,
}
