use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::util::easing::EasingFunction;

/// Transition timing, easing and session start-up behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
pub struct TransitionOptions {
    /// Base duration in milliseconds. Each tile task draws its own
    /// duration from `[base, 2 * base)`.
    #[schemars(title = "Base Duration (ms)", range(min = 0, max = 10_000), extend("step" = 100))]
    pub base_duration_ms: u64,
    /// Easing curve applied to every tile task.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Layout the session transitions to right after creation. `None`
    /// leaves tiles at their scattered start positions.
    #[schemars(title = "Initial Layout")]
    pub initial_layout: Option<Layout>,
    /// Half-extent of the cube tiles are scattered in before the first
    /// transition.
    #[schemars(skip)]
    pub scatter_extent: f32,
}

impl TransitionOptions {
    /// Base duration as a [`Duration`].
    #[must_use]
    pub fn base_duration(&self) -> Duration {
        Duration::from_millis(self.base_duration_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            base_duration_ms: 2000,
            easing: EasingFunction::DEFAULT,
            initial_layout: Some(Layout::Table),
            scatter_extent: 2000.0,
        }
    }
}
