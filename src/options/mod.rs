//! Centralized session options with TOML preset support.
//!
//! Layout geometry, transition timing, camera and color settings are
//! consolidated here. Options serialize to/from TOML so a view can be stored
//! as a named preset.

mod camera;
mod colors;
mod layout;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use layout::{
    GridOptions, HelixOptions, LayoutOptions, SphereOptions, TableOptions,
    TetrahedronOptions, TetrahedronStyle,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::TilescapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Per-layout geometry.
    pub layout: LayoutOptions,
    /// Transition timing and easing.
    pub transition: TransitionOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Net-worth color coding.
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TilescapeError> {
        let content =
            std::fs::read_to_string(path).map_err(TilescapeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TilescapeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TilescapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TilescapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TilescapeError::Io)?;
        }
        std::fs::write(path, content).map_err(TilescapeError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
