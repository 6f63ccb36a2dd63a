//! Collision between the car and the road edges
//!
//! Only the two segments nearest the car are tested. The car never moves
//! vertically, so it sits inside the near segment until that segment's top
//! edge scrolls down past the car's top edge; from then on it also overlaps
//! the far segment and must fit between both pairs of edges.

use super::config::GameConfig;
use super::types::Segment;

/// Whether `[left, right]` fits between a segment's edges, give or take the tolerance
fn fits_within(left: f32, right: f32, segment: &Segment, tolerance: f32) -> bool {
    left >= segment.top_left_x - tolerance && right <= segment.top_right_x + tolerance
}

/// Whether the far segment's edges have reached the car
pub fn far_segment_reached(near: &Segment, config: &GameConfig) -> bool {
    near.top_y - config.collision_tolerance >= config.car_y()
}

/// Returns `true` if the car at horizontal position `car_x` has left the road
pub fn check_collision(car_x: f32, near: &Segment, far: &Segment, config: &GameConfig) -> bool {
    let left = car_x;
    let right = car_x + config.car_width;
    let tolerance = config.collision_tolerance;

    if !fits_within(left, right, near, tolerance) {
        return true;
    }

    far_segment_reached(near, config) && !fits_within(left, right, far, tolerance)
}
