//! Frame clock for fixed-rate tick loops.

use web_time::{Duration, Instant};

/// Per-tick clock for driving a session: hands out the elapsed delta since
/// the previous tick and optionally paces ticks to a target rate.
pub struct FrameTiming {
    /// Target ticks per second (0 = unlimited)
    target_fps: u32,
    /// Minimum tick spacing derived from the target rate
    min_frame_duration: Duration,
    /// Timestamp of the previous tick
    last_frame: Instant,
    /// Exponentially smoothed tick rate
    smoothed_fps: f32,
    /// Weight of the newest sample in the moving average
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame clock with the given tick rate target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Time left until the next tick is due (zero when unlimited or late).
    #[must_use]
    pub fn until_next_frame(&self) -> Duration {
        if self.target_fps == 0 {
            return Duration::ZERO;
        }
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Mark the start of a tick and return the delta since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Smoothed tick rate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
