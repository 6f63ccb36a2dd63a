//! Game state tracking for the road runner
//!
//! This module tracks the run phase and the score, which is the number of
//! seconds survived since the run started.

/// Whether the road is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    /// The car crashed; waiting for a restart
    Paused,
}

/// Game state that tracks the current run and the best one so far
///
/// The high score lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub phase: Phase,

    /// Clock reading when the current run started
    pub run_start_time: f64,

    /// Score of the most recent crash
    pub last_score: f64,

    /// Best score of this process
    pub high_score: f64,

    /// Number of runs started, including the current one
    pub runs: u32,
}

impl GameState {
    /// Create a new game state with a run starting at `now`
    pub fn new(now: f64) -> Self {
        Self {
            phase: Phase::Running,
            run_start_time: now,
            last_score: 0.0,
            high_score: 0.0,
            runs: 1,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Current score: live while running, frozen once paused
    pub fn score(&self, now: f64) -> f64 {
        match self.phase {
            Phase::Running => (now - self.run_start_time).max(0.0),
            Phase::Paused => self.last_score,
        }
    }

    /// Freeze the score and pause
    ///
    /// Returns the frozen score. Crashing while already paused changes nothing.
    pub fn crash(&mut self, now: f64) -> f64 {
        if self.is_paused() {
            return self.last_score;
        }
        self.last_score = self.score(now);
        self.high_score = self.high_score.max(self.last_score);
        self.phase = Phase::Paused;
        self.last_score
    }

    /// Start a new run at `now`, keeping the high score
    pub fn restart(&mut self, now: f64) {
        self.phase = Phase::Running;
        self.run_start_time = now;
        self.runs += 1;
    }

    /// Get a summary string for display
    pub fn summary(&self, now: f64) -> String {
        format!(
            "Run: {} | Score: {} | High Score: {} | {}",
            self.runs,
            self.score(now) as u64,
            self.high_score as u64,
            match self.phase {
                Phase::Running => "running",
                Phase::Paused => "paused",
            }
        )
    }
}
