//! Statistics collected over a headless session

use log::info;

use super::world::TickOutcome;

#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub ticks: u64,
    pub crashes: u32,
    pub restarts: u32,
    pub segments_recycled: u64,
    pub best_score: f64,
    pub top_speed: f32,
    pub simulated_time: f64,
}

impl RunStats {
    /// Record the outcome of one tick
    pub fn record(&mut self, outcome: &TickOutcome, delta_secs: f32, speed: f32) {
        self.ticks += 1;
        self.simulated_time += delta_secs as f64;
        self.top_speed = self.top_speed.max(speed);

        match *outcome {
            TickOutcome::Moved { recycled } => {
                self.segments_recycled += u64::from(recycled);
            }
            TickOutcome::Crashed { score, recycled } => {
                self.segments_recycled += u64::from(recycled);
                self.crashes += 1;
                self.best_score = self.best_score.max(score);
            }
            TickOutcome::Restarted => self.restarts += 1,
            TickOutcome::Idle => {}
        }
    }

    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Simulated time: {:.2}s", self.simulated_time);
        info!("Total ticks: {}", self.ticks);
        info!("Segments recycled: {}", self.segments_recycled);
        info!("Crashes: {}", self.crashes);
        info!("Restarts: {}", self.restarts);
        info!("Best score: {:.1}s", self.best_score);
        info!("Top speed: {:.2}", self.top_speed);
    }
}
