//! Steering policy for headless runs
//!
//! Keeps the car centred on the corridor shared by the two nearest segments.

use super::types::Steer;
use super::world::RunnerWorld;

/// Distance from the target inside which the car holds its line
pub const AUTOPILOT_DEAD_ZONE: f32 = 4.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Horizontal centre the car should head for
    pub fn target_x(world: &RunnerWorld) -> Option<f32> {
        let (near, far) = world.sequence().front_two().ok()?;
        let left = near.top_left_x.max(far.top_left_x);
        let right = near.top_right_x.min(far.top_right_x);
        Some((left + right) / 2.0)
    }

    pub fn steer(&self, world: &RunnerWorld) -> Steer {
        let Some(target) = Self::target_x(world) else {
            return Steer::None;
        };

        let offset = target - world.car().center_x(world.config());
        if offset > AUTOPILOT_DEAD_ZONE {
            Steer::Right
        } else if offset < -AUTOPILOT_DEAD_ZONE {
            Steer::Left
        } else {
            Steer::None
        }
    }
}
