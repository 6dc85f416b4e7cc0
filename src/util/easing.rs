//! Easing functions for tile interpolation.
//!
//! All curves map progress in [0, 1] to eased progress in [0, 1] and hit
//! both endpoints exactly, so a finished tween lands on its target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Exponential ease-in: `2^(10(t-1))`.
    ExponentialIn,
    /// Exponential ease-out: `1 - 2^(-10t)`.
    ExponentialOut,
    /// Exponential ease-in-out: slow start, fast middle, slow end.
    ExponentialInOut,
}

impl EasingFunction {
    /// Default easing for layout transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::ExponentialInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        // The exponential curves only approach their endpoints.
        if t == 0.0 || t == 1.0 {
            return t;
        }

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::ExponentialIn => 2.0_f32.powf(10.0 * (t - 1.0)),
            EasingFunction::ExponentialOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            EasingFunction::ExponentialInOut => {
                let k = t * 2.0;
                if k < 1.0 {
                    0.5 * 1024.0_f32.powf(k - 1.0)
                } else {
                    0.5 * (2.0 - 2.0_f32.powf(-10.0 * (k - 1.0)))
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
