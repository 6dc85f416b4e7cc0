//! Render hook: what the session hands to the external renderer.

use crate::camera::core::{Camera, CameraUniform};
use crate::layout::Pose;
use crate::tile::Tile;

/// Per-tile instance data for the external renderer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// RGBA background color.
    pub color: [f32; 4],
}

/// Snapshot of the scene at one tick.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Tiles in stable index order.
    pub tiles: &'a [Tile],
    /// Live poses, `poses[i]` belongs to `tiles[i]`.
    pub poses: &'a [Pose],
    /// Current camera.
    pub camera: &'a Camera,
}

impl Frame<'_> {
    /// Instance data for every tile, in index order.
    #[must_use]
    pub fn instances(&self) -> Vec<TileInstance> {
        self.tiles
            .iter()
            .zip(self.poses)
            .map(|(tile, pose)| TileInstance {
                model: pose.model_matrix().to_cols_array_2d(),
                color: tile.card.color,
            })
            .collect()
    }

    /// Camera uniform for this frame.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera.uniform()
    }
}

/// Receives a frame whenever the scene changed.
pub trait RenderHook {
    /// Draw `frame`.
    fn render(&mut self, frame: &Frame<'_>);
}

impl<F> RenderHook for F
where
    F: FnMut(&Frame<'_>),
{
    fn render(&mut self, frame: &Frame<'_>) {
        self(frame);
    }
}
