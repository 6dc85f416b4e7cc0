use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Net-worth color coding for tile backgrounds.
///
/// A value strictly above `high_threshold` gets `high`, strictly above
/// `mid_threshold` gets `mid`, anything else gets `low`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Colors", inline)]
#[serde(default)]
pub struct ColorOptions {
    /// Lower bound (exclusive) of the high tier.
    #[schemars(title = "High Threshold")]
    pub high_threshold: f64,
    /// Lower bound (exclusive) of the mid tier.
    #[schemars(title = "Mid Threshold")]
    pub mid_threshold: f64,
    /// RGBA background for the high tier.
    #[schemars(skip)]
    pub high: [f32; 4],
    /// RGBA background for the mid tier.
    #[schemars(skip)]
    pub mid: [f32; 4],
    /// RGBA background for the low tier.
    #[schemars(skip)]
    pub low: [f32; 4],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            high_threshold: 200_000.0,
            mid_threshold: 100_000.0,
            high: [0.0, 0.498, 0.0, 0.7],
            mid: [1.0, 0.647, 0.0, 0.7],
            low: [0.784, 0.0, 0.0, 0.7],
        }
    }
}
