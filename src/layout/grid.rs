//! 3D box grid.

use glam::Vec3;

use super::Pose;
use crate::options::GridOptions;

/// `x` cycles every `columns` tiles, `y` every `rows` rows and `z` advances
/// one layer every `columns * rows` tiles. Default facing.
#[must_use]
pub fn generate(count: usize, opts: &GridOptions) -> Vec<Pose> {
    let columns = opts.columns.max(1) as usize;
    let rows = opts.rows.max(1) as usize;
    (0..count)
        .map(|i| {
            let col = (i % columns) as f32;
            let row = ((i / columns) % rows) as f32;
            let layer = (i / (columns * rows)) as f32;
            Pose::at(Vec3::new(
                col * opts.spacing_x - opts.offset_x,
                -row * opts.spacing_y + opts.offset_y,
                layer * opts.spacing_z - opts.offset_z,
            ))
        })
        .collect()
}
