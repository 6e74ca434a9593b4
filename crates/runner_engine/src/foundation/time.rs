//! Frame timing
//!
//! The collision core is unit agnostic; the game feeds it milliseconds, the
//! same unit the obstacle velocities are tuned in.

use std::time::Instant;

/// Frame clock producing the per-frame delta time in milliseconds
pub struct FrameTimer {
    last_frame: Instant,
    delta_ms: f32,
    total_ms: f64,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_ms: 0.0,
            total_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Advance using wall-clock time (should be called once per frame)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed.as_secs_f32() * 1000.0)
    }

    /// Advance by a fixed step, for deterministic headless runs
    pub fn tick_fixed(&mut self, step_ms: f32) -> f32 {
        self.last_frame = Instant::now();
        self.advance(step_ms)
    }

    fn advance(&mut self, delta_ms: f32) -> f32 {
        self.delta_ms = delta_ms.max(0.0);
        self.total_ms += f64::from(self.delta_ms);
        self.frame_count += 1;
        self.delta_ms
    }

    /// Time since the last frame in milliseconds
    pub fn delta_ms(&self) -> f32 {
        self.delta_ms
    }

    /// Total elapsed time in milliseconds
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    /// Number of frames ticked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
