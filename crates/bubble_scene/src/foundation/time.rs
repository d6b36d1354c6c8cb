//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer tracking delta, total time and frame count
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer from the wall clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed.as_secs_f32());
    }

    /// Advance the timer by an externally measured delta
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time.max(0.0);
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Instant,
}

impl Stopwatch {
    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        Self { start_time: Instant::now() }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timer_advance() {
        let mut timer = Timer::new();
        timer.advance(0.5);
        timer.advance(0.25);

        assert_eq!(timer.frame_count(), 2);
        assert_relative_eq!(timer.total_time(), 0.75);
        assert_relative_eq!(timer.current_fps(), 4.0);
        assert_relative_eq!(timer.average_fps(), 2.0 / 0.75);
    }

    #[test]
    fn test_timer_clamps_negative_delta() {
        let mut timer = Timer::new();
        timer.advance(-1.0);
        assert_eq!(timer.delta_time(), 0.0);
        assert_eq!(timer.current_fps(), 0.0);
    }
}
