//! A single eased interpolation task for one channel of one tile.

use std::time::Duration;

use glam::Vec3;

use crate::layout::Pose;
use crate::util::easing::EasingFunction;

/// Which half of a pose a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// World-space position.
    Position,
    /// Euler orientation.
    Rotation,
}

/// Interpolates one tile channel from `start` to `target` over `duration`.
///
/// Time only moves forward through [`advance`](Self::advance); once elapsed
/// reaches the duration the tween reports complete and yields the target
/// exactly.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Index of the tile this tween writes to.
    pub tile: usize,
    /// Channel this tween writes to.
    pub channel: Channel,
    start: Vec3,
    target: Vec3,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    /// Tween starting now with nothing elapsed.
    #[must_use]
    pub fn new(
        tile: usize,
        channel: Channel,
        start: Vec3,
        target: Vec3,
        duration: Duration,
    ) -> Self {
        Self {
            tile,
            channel,
            start,
            target,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Total duration of this tween.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Destination value.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Raw progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Value at the current progress under `easing`.
    #[must_use]
    pub fn value(&self, easing: EasingFunction) -> Vec3 {
        if self.is_complete() {
            return self.target;
        }
        let eased = easing.evaluate(self.progress());
        self.start + (self.target - self.start) * eased
    }

    /// Move time forward by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration, easing: EasingFunction) -> Vec3 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value(easing)
    }

    /// Write `value` into the channel this tween drives.
    pub fn write(&self, pose: &mut Pose, value: Vec3) {
        match self.channel {
            Channel::Position => pose.position = value,
            Channel::Rotation => pose.rotation = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween(ms: u64) -> Tween {
        Tween::new(
            0,
            Channel::Position,
            Vec3::ZERO,
            Vec3::new(10.0, -20.0, 30.0),
            Duration::from_millis(ms),
        )
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut t = tween(100);
        assert_eq!(t.progress(), 0.0);
        let _ = t.advance(Duration::from_millis(50), EasingFunction::Linear);
        assert!((t.progress() - 0.5).abs() < 1e-6);
        let _ = t.advance(Duration::from_millis(500), EasingFunction::Linear);
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_complete());
    }

    #[test]
    fn test_linear_midpoint() {
        let mut t = tween(100);
        let v = t.advance(Duration::from_millis(50), EasingFunction::Linear);
        assert!((v - Vec3::new(5.0, -10.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn test_eased_value_lags_early() {
        let mut t = tween(1000);
        let v = t.advance(
            Duration::from_millis(100),
            EasingFunction::ExponentialInOut,
        );
        assert!(v.x < 0.1);
    }

    #[test]
    fn test_completion_lands_exactly_on_target() {
        let mut t = tween(33);
        let mut last = Vec3::ZERO;
        for _ in 0..10 {
            last = t.advance(
                Duration::from_millis(7),
                EasingFunction::ExponentialInOut,
            );
        }
        assert_eq!(last, t.target());
    }

    #[test]
    fn test_zero_duration_is_immediately_complete() {
        let t = tween(0);
        assert!(t.is_complete());
        assert_eq!(t.value(EasingFunction::Linear), t.target());
    }

    #[test]
    fn test_write_targets_channel() {
        let mut pose = Pose::IDENTITY;
        let t = Tween::new(
            0,
            Channel::Rotation,
            Vec3::ZERO,
            Vec3::X,
            Duration::ZERO,
        );
        t.write(&mut pose, Vec3::X);
        assert_eq!(pose.rotation, Vec3::X);
        assert_eq!(pose.position, Vec3::ZERO);
    }
}
