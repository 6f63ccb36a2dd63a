//! Main simulation world that ties everything together
//!
//! This is the entry point for running the road runner without any Bevy
//! dependencies. A front end feeds one `FrameInput` per frame into
//! `RunnerWorld::tick` and draws whatever the accessors expose.

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::collision::check_collision;
use super::config::GameConfig;
use super::game_state::GameState;
use super::scroll::ScrollEngine;
use super::segment_sequence::SegmentSequence;
use super::types::{Car, Segment, Steer};

/// Everything the platform reports for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Monotonic clock reading in seconds
    pub now: f64,
    /// Seconds since the previous frame
    pub dt: f32,
    pub steer: Steer,
    pub restart: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Paused and no restart requested; nothing moved
    Idle,
    /// The road scrolled and the car is still on it
    Moved { recycled: bool },
    /// The car left the road; the run is over
    Crashed { score: f64, recycled: bool },
    /// A new run was started
    Restarted,
}

/// The main simulation world
pub struct RunnerWorld {
    config: GameConfig,

    /// Visible and upcoming road, front is under the car
    sequence: SegmentSequence,

    car: Car,

    scroll: ScrollEngine,

    pub game_state: GameState,

    /// Source of all road randomness
    rng: StdRng,
}

impl RunnerWorld {
    fn new_internal(config: GameConfig, mut rng: StdRng, now: f64) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;

        let mut sequence = SegmentSequence::new();
        sequence
            .bootstrap(&config, &mut rng)
            .context("Failed to build the initial road")?;

        Ok(Self {
            car: Car::centered(&config),
            scroll: ScrollEngine::new(&config),
            game_state: GameState::new(now),
            sequence,
            config,
            rng,
        })
    }

    /// Create a world whose road is seeded from OS entropy
    pub fn new(config: GameConfig, now: f64) -> Result<Self> {
        Self::new_internal(config, StdRng::from_os_rng(), now)
    }

    /// Create a world with a seeded RNG for reproducible roads
    pub fn new_with_seed(config: GameConfig, seed: u64, now: f64) -> Result<Self> {
        Self::new_internal(config, StdRng::seed_from_u64(seed), now)
    }

    /// Advance the game by one frame
    pub fn tick(&mut self, input: &FrameInput) -> Result<TickOutcome> {
        if self.game_state.is_paused() {
            if input.restart {
                self.restart(input.now)?;
                return Ok(TickOutcome::Restarted);
            }
            return Ok(TickOutcome::Idle);
        }

        self.car.steer(input.steer, input.dt, &self.config);

        let recycled = self
            .scroll
            .tick(&mut self.sequence, input.dt, &self.config, &mut self.rng)?;

        let (near, far) = self.sequence.front_two()?;
        if check_collision(self.car.left(), near, far, &self.config) {
            let score = self.game_state.crash(input.now);
            info!(
                "Car crashed at x={:.0} after {:.1}s (high score {:.1}s)",
                self.car.left(),
                score,
                self.game_state.high_score
            );
            return Ok(TickOutcome::Crashed { score, recycled });
        }

        Ok(TickOutcome::Moved { recycled })
    }

    /// Throw away the road and start a fresh run at `now`
    pub fn restart(&mut self, now: f64) -> Result<()> {
        self.sequence
            .bootstrap(&self.config, &mut self.rng)
            .context("Failed to rebuild the road")?;
        self.car = Car::centered(&self.config);
        self.scroll.reset();
        self.game_state.restart(now);
        info!("Run {} started", self.game_state.runs);
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sequence(&self) -> &SegmentSequence {
        &self.sequence
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn current_speed(&self) -> f32 {
        self.scroll.current_speed()
    }

    pub fn score(&self, now: f64) -> f64 {
        self.game_state.score(now)
    }

    pub fn high_score(&self) -> f64 {
        self.game_state.high_score
    }

    pub fn is_paused(&self) -> bool {
        self.game_state.is_paused()
    }

    /// Segment covering screen row `y`, if any
    fn segment_at(&self, y: f32) -> Option<&Segment> {
        self.sequence
            .iter()
            .find(|s| s.top_y <= y && y < s.bottom_y())
    }

    pub fn print_summary(&self, now: f64) {
        println!("=== Road Runner Summary ===");
        println!("{}", self.game_state.summary(now));
        println!(
            "Speed: {:.2} px/s (cap {:.0})",
            self.current_speed(),
            self.scroll.speed.cap()
        );
        println!(
            "Car: x={:.1} [{:.1}, {:.1}]",
            self.car.left(),
            self.car.left(),
            self.car.right(&self.config)
        );
        println!("--- Segments (front to back) ---");
        for segment in self.sequence.iter() {
            println!(
                "  [{:6.1}, {:6.1}] width={:5.1} top_y={:8.1} height={:.0}",
                segment.top_left_x,
                segment.top_right_x,
                segment.width(),
                segment.top_y,
                segment.height
            );
        }
    }

    /// Draw the visible screen in the terminal
    pub fn draw_map(&self) {
        const COLUMNS: usize = 64;
        const ROWS: usize = 20;

        let cell_width = self.config.screen_width / COLUMNS as f32;
        let cell_height = self.config.screen_height / ROWS as f32;
        let to_col = |x: f32| -> usize { ((x / cell_width).max(0.0) as usize).min(COLUMNS - 1) };

        let car_top = self.car.pos.y;
        let car_bottom = car_top + self.config.car_height;
        let car_cols = to_col(self.car.left())..=to_col(self.car.right(&self.config) - 1.0);

        println!("\n=== Road Map ===");
        println!("Legend: |=Road edge, .=Off road, C=Car");
        println!();
        for row in 0..ROWS {
            let y = (row as f32 + 0.5) * cell_height;
            let mut line = vec!['.'; COLUMNS];

            if let Some(segment) = self.segment_at(y) {
                let left = to_col(segment.top_left_x);
                let right = to_col(segment.top_right_x);
                for cell in line.iter_mut().take(right + 1).skip(left) {
                    *cell = ' ';
                }
                line[left] = '|';
                line[right] = '|';
            }

            if y >= car_top && y < car_bottom {
                for col in car_cols.clone() {
                    line[col] = 'C';
                }
            }

            println!("{}", line.into_iter().collect::<String>());
        }
        println!();
    }
}
