//! Camera for viewing the tile scene.
//!
//! Provides a perspective camera, the pure viewport-resize projection hook,
//! and an orbit/zoom controller.

/// Orbit controller managing rotation and zoom around the scene origin.
pub mod controller;
/// Core camera struct, projection hook and GPU uniform type.
pub mod core;
