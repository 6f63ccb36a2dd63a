//! The scrolling road: a fixed-size ring of segments
//!
//! The oldest segment (bottom-most, largest `top_y`) is at the front and the
//! newest (top-most) at the back. The length never changes between ticks:
//! every eviction is paired with an append.

use std::collections::VecDeque;

use anyhow::{ensure, Context, Result};
use log::debug;
use rand::Rng;

use super::config::GameConfig;
use super::generator::{generate_segment, runway_segment};
use super::types::{Segment, SegmentEdges};

#[derive(Debug, Clone, Default)]
pub struct SegmentSequence {
    segments: VecDeque<Segment>,
}

impl SegmentSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing front-to-back list of segments
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Build a fresh road: the runway followed by generated segments
    pub fn bootstrap<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) -> Result<()> {
        let target = config.sequence_len();
        ensure!(target >= 2, "sequence needs at least two segments, config asks for {}", target);

        self.segments.clear();
        self.segments.reserve(target);
        self.segments.push_back(runway_segment(config));

        while self.segments.len() < target {
            let previous = *self
                .segments
                .back()
                .context("sequence emptied during bootstrap")?;
            self.segments.push_back(generate_segment(&previous, config, rng));
        }

        debug!("Bootstrapped road with {} segments", self.segments.len());
        Ok(())
    }

    /// Scroll every segment down by `speed * delta_secs`
    pub fn advance(&mut self, delta_secs: f32, speed: f32) {
        let dy = speed * delta_secs;
        for segment in &mut self.segments {
            segment.top_y += dy;
        }
    }

    /// Replace the front segment once it has left the bottom of the screen
    ///
    /// Returns `true` when a segment was recycled. Fails if the road does not
    /// hold exactly `config.sequence_len()` segments.
    pub fn recycle_if_needed<R: Rng>(
        &mut self,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<bool> {
        ensure!(
            self.segments.len() == config.sequence_len(),
            "road holds {} segments, expected {}",
            self.segments.len(),
            config.sequence_len()
        );

        let front = self.front().context("cannot recycle an empty road")?;
        if front.top_y < config.screen_height {
            return Ok(false);
        }

        let newest = *self.back().context("cannot recycle an empty road")?;
        let fresh = generate_segment(&newest, config, rng);
        self.segments.pop_front();
        self.segments.push_back(fresh);

        debug!(
            "Recycled segment, new top segment spans [{:.0}, {:.0}]",
            fresh.top_left_x, fresh.top_right_x
        );
        Ok(true)
    }

    /// The segment under the car and the one right above it
    pub fn front_two(&self) -> Result<(&Segment, &Segment)> {
        let near = self
            .segments
            .front()
            .context("road has no segment under the car")?;
        let far = self
            .segments
            .get(1)
            .context("road has no segment ahead of the car")?;
        Ok((near, far))
    }

    pub fn front(&self) -> Option<&Segment> {
        self.segments.front()
    }

    pub fn back(&self) -> Option<&Segment> {
        self.segments.back()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Front to back
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Outline of every segment, front to back
    pub fn edges(&self) -> Vec<SegmentEdges> {
        let mut edges = Vec::with_capacity(self.segments.len());
        let mut below: Option<&Segment> = None;

        for segment in &self.segments {
            let connectors = below.map(|lower| {
                [
                    (segment.bottom_left(), lower.top_left()),
                    (segment.bottom_right(), lower.top_right()),
                ]
            });
            edges.push(SegmentEdges {
                left: (segment.top_left(), segment.bottom_left()),
                right: (segment.top_right(), segment.bottom_right()),
                connectors,
            });
            below = Some(segment);
        }

        edges
    }
}
