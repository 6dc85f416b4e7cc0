use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit/zoom control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial eye distance from the origin along +Z.
    #[schemars(title = "Distance", range(min = 500.0, max = 6000.0), extend("step" = 50.0))]
    pub distance: f32,
    /// Closest the orbit controller may zoom in.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the orbit controller may zoom out.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 1.0,
            zfar: 10_000.0,
            distance: 3000.0,
            min_distance: 500.0,
            max_distance: 6000.0,
            rotate_speed: 0.5,
            zoom_speed: 0.1,
        }
    }
}
