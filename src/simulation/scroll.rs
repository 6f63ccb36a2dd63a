//! Road scrolling and difficulty ramp

use anyhow::Result;
use rand::Rng;

use super::config::GameConfig;
use super::segment_sequence::SegmentSequence;

/// Scroll speed that ramps up by a fixed step every tick until it hits a cap
///
/// The step is per tick, not per second, so a faster frame rate ramps faster.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedController {
    base: f32,
    accel_per_tick: f32,
    cap: f32,
    current: f32,
}

impl SpeedController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            base: config.base_scroll_speed,
            accel_per_tick: config.scroll_accel_per_tick,
            cap: config.scroll_speed_cap,
            current: config.base_scroll_speed.min(config.scroll_speed_cap),
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn cap(&self) -> f32 {
        self.cap
    }

    pub fn step(&mut self) {
        self.current = (self.current + self.accel_per_tick).min(self.cap);
    }

    pub fn reset(&mut self) {
        self.current = self.base.min(self.cap);
    }
}

/// Moves the road under the car and keeps the sequence topped up
#[derive(Debug, Clone)]
pub struct ScrollEngine {
    pub speed: SpeedController,
}

impl ScrollEngine {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            speed: SpeedController::new(config),
        }
    }

    /// Advance one tick
    ///
    /// Positions move by `speed * delta_secs`, then the bottom segment is
    /// recycled if it left the screen, then the speed takes one step.
    /// Returns whether a segment was recycled.
    pub fn tick<R: Rng>(
        &mut self,
        sequence: &mut SegmentSequence,
        delta_secs: f32,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<bool> {
        sequence.advance(delta_secs, self.speed.current());
        let recycled = sequence.recycle_if_needed(config, rng)?;
        self.speed.step();
        Ok(recycled)
    }

    pub fn current_speed(&self) -> f32 {
        self.speed.current()
    }

    pub fn reset(&mut self) {
        self.speed.reset();
    }
}
