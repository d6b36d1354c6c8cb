//! Frame loop runner
//!
//! Drives [`SceneApp::tick`] the way a host's per-frame callback would:
//! measure the frame, tick, then sleep off whatever is left of the frame
//! budget.

use std::thread;
use std::time::Duration;

use crate::application::{SceneApp, SceneError};
use crate::core::EngineSettings;
use crate::foundation::time::{Stopwatch, Timer};
use crate::render::Renderer;

/// Runs ticks until the app stops, the frame limit is hit or an error occurs
pub struct FrameLoop {
    frame_budget: Option<Duration>,
    max_frames: Option<u64>,
    stats_interval: u64,
    timer: Timer,
}

impl FrameLoop {
    /// Runner paced to `settings.target_fps`
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            frame_budget: Some(Duration::from_secs_f64(1.0 / f64::from(settings.target_fps.max(1)))),
            max_frames: settings.max_frames,
            stats_interval: settings.stats_interval_frames,
            timer: Timer::new(),
        }
    }

    /// Runner that never sleeps between frames
    pub fn unpaced(settings: &EngineSettings) -> Self {
        Self {
            frame_budget: None,
            ..Self::new(settings)
        }
    }

    /// Run the loop; returns the number of frames ticked
    pub fn run(&mut self, app: &mut SceneApp, renderer: &mut dyn Renderer) -> Result<u64, SceneError> {
        log::info!("Starting frame loop...");
        let mut frames = 0_u64;

        while app.is_running() && self.max_frames.map_or(true, |max| frames < max) {
            let frame = Stopwatch::start_new();

            self.timer.update();
            app.tick(self.timer.delta_time(), renderer)?;
            frames += 1;

            if self.stats_interval > 0 && frames % self.stats_interval == 0 {
                let summary = app.last_summary();
                log::debug!(
                    "Frame {}: {:.1} fps (avg {:.1}), {} recycled, {} collisions, {} contained",
                    frames,
                    self.timer.current_fps(),
                    self.timer.average_fps(),
                    summary.recycled_bubbles,
                    summary.cube_collisions,
                    summary.cube_containments
                );
            }

            if let Some(budget) = self.frame_budget {
                if let Some(remaining) = budget.checked_sub(frame.elapsed()) {
                    thread::sleep(remaining);
                }
            }
        }

        log::info!("Frame loop finished after {} frames", frames);
        Ok(frames)
    }
}
