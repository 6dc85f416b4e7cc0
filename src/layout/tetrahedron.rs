//! Triangular pyramid, either stacked layer by layer or scattered over the
//! four faces.

use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::Pose;
use crate::options::{TetrahedronOptions, TetrahedronStyle};

/// Row depth of a triangular lattice with unit spacing.
const ROW_DEPTH: f32 = 0.866_025_4; // sqrt(3) / 2

/// A slot in the stacked pyramid. Layer `L` (1-based, apex first) holds
/// `L` rows and row `r` holds `r + 1` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetraSlot {
    /// Layer index, starting at 1 for the apex.
    pub layer: usize,
    /// Row within the layer, `0..layer`.
    pub row: usize,
    /// Column within the row, `0..=row`.
    pub col: usize,
}

/// The first `count` slots in layer-major, row-major, column-major order.
pub fn slots(count: usize) -> impl Iterator<Item = TetraSlot> {
    (1..)
        .flat_map(|layer| {
            (0..layer).flat_map(move |row| {
                (0..=row).map(move |col| TetraSlot { layer, row, col })
            })
        })
        .take(count)
}

/// Number of layers needed to hold `count` slots.
#[must_use]
pub fn layers_for(count: usize) -> usize {
    let mut layers = 0;
    let mut capacity = 0;
    while capacity < count {
        layers += 1;
        capacity += layers * (layers + 1) / 2;
    }
    layers
}

/// Tetrahedron poses for `count` tiles, each facing outward.
#[must_use]
pub fn generate(count: usize, opts: &TetrahedronOptions) -> Vec<Pose> {
    match opts.style {
        TetrahedronStyle::Stacked => stacked(count, opts),
        TetrahedronStyle::Scattered => scattered(count, opts),
    }
}

fn stacked(count: usize, opts: &TetrahedronOptions) -> Vec<Pose> {
    let layers = layers_for(count);
    let top = (layers.saturating_sub(1)) as f32 * opts.layer_height * 0.5;
    let row_depth = opts.spacing * ROW_DEPTH;

    slots(count)
        .map(|slot| {
            let depth = (slot.layer - 1) as f32;
            // Rows centered on their midpoint, layers on their centroid.
            let x = (slot.col as f32 - slot.row as f32 * 0.5) * opts.spacing;
            let z = (slot.row as f32 - depth * 2.0 / 3.0) * row_depth;
            let y = top - depth * opts.layer_height;
            Pose::facing_outward(Vec3::new(x, y, z))
        })
        .collect()
}

/// Corners of a regular tetrahedron with unit circumradius.
fn corners() -> [Vec3; 4] {
    [
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(1.0, -1.0, -1.0).normalize(),
        Vec3::new(-1.0, 1.0, -1.0).normalize(),
        Vec3::new(-1.0, -1.0, 1.0).normalize(),
    ]
}

/// Face `f` is the one opposite corner `f`.
const FACES: [[usize; 3]; 4] = [[1, 2, 3], [0, 3, 2], [0, 1, 3], [0, 2, 1]];

fn scattered(count: usize, opts: &TetrahedronOptions) -> Vec<Pose> {
    let corners = corners().map(|c| c * opts.size);
    let mut rng = StdRng::seed_from_u64(opts.seed);

    (0..count)
        .map(|i| {
            let [a, b, c] = FACES[i % 4].map(|k| corners[k]);
            let mut u: f32 = rng.random();
            let mut v: f32 = rng.random();
            if u + v > 1.0 {
                u = 1.0 - u;
                v = 1.0 - v;
            }
            Pose::facing_outward(a + (b - a) * u + (c - a) * v)
        })
        .collect()
}
