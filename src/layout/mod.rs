//! Layout generator: pure mappings from tile count to target poses.
//!
//! Every layout is index-and-count driven: tile `i` always receives pose
//! `i`, and a call with `count` tiles returns exactly `count` poses (an
//! empty set for zero). Layouts never look at tile content.

pub mod grid;
pub mod helix;
mod pose;
pub mod sphere;
pub mod table;
pub mod tetrahedron;

use std::{fmt, str::FromStr};

pub use pose::Pose;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::TilescapeError, options::LayoutOptions};

/// A named spatial arrangement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Flat row-major table.
    Table,
    /// Golden-section sphere.
    Sphere,
    /// Double helix.
    Helix,
    /// 3D box grid.
    Grid,
    /// Triangular pyramid.
    Tetrahedron,
}

impl Layout {
    /// Every layout, in menu order.
    pub const ALL: [Layout; 5] = [
        Layout::Table,
        Layout::Sphere,
        Layout::Helix,
        Layout::Grid,
        Layout::Tetrahedron,
    ];

    /// Lowercase name used by the trigger API.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Layout::Table => "table",
            Layout::Sphere => "sphere",
            Layout::Helix => "helix",
            Layout::Grid => "grid",
            Layout::Tetrahedron => "tetrahedron",
        }
    }

    /// Target poses for `count` tiles under this layout.
    #[must_use]
    pub fn generate(self, count: usize, opts: &LayoutOptions) -> Vec<Pose> {
        match self {
            Layout::Table => table::generate(count, &opts.table),
            Layout::Sphere => sphere::generate(count, &opts.sphere),
            Layout::Helix => helix::generate(count, &opts.helix),
            Layout::Grid => grid::generate(count, &opts.grid),
            Layout::Tetrahedron => {
                tetrahedron::generate(count, &opts.tetrahedron)
            }
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = TilescapeError;

    /// Case-insensitive; `"pyramid"` is accepted for the tetrahedron.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "table" => Ok(Layout::Table),
            "sphere" => Ok(Layout::Sphere),
            "helix" => Ok(Layout::Helix),
            "grid" => Ok(Layout::Grid),
            "tetrahedron" | "pyramid" => Ok(Layout::Tetrahedron),
            _ => Err(TilescapeError::UnknownLayout(s.to_owned())),
        }
    }
}

/// Lazily computed target sets for a fixed tile count.
///
/// Each layout's set is generated on first request and reused until the
/// count or the layout options change, at which point every set is
/// discarded.
#[derive(Debug, Clone, Default)]
pub struct LayoutTargets {
    count: usize,
    sets: [Option<Vec<Pose>>; 5],
}

impl LayoutTargets {
    /// Empty cache for `count` tiles.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            sets: Default::default(),
        }
    }

    /// Tile count the cached sets were generated for.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Target poses for `layout`, generating them if not cached.
    pub fn get(&mut self, layout: Layout, opts: &LayoutOptions) -> &[Pose] {
        let count = self.count;
        self.sets[layout.slot()].get_or_insert_with(|| {
            log::debug!("generating {layout} targets for {count} tiles");
            layout.generate(count, opts)
        })
    }

    /// Whether `layout` currently has a cached set.
    #[must_use]
    pub fn is_cached(&self, layout: Layout) -> bool {
        self.sets[layout.slot()].is_some()
    }

    /// Drop every cached set, optionally switching to a new tile count.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.sets = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TetrahedronStyle;

    #[test]
    fn every_layout_returns_exactly_count_poses() {
        let opts = LayoutOptions::default();
        for layout in Layout::ALL {
            for count in [0, 1, 2, 3, 19, 20, 21, 100, 257] {
                assert_eq!(
                    layout.generate(count, &opts).len(),
                    count,
                    "{layout} n={count}"
                );
            }
        }
    }

    #[test]
    fn scattered_tetrahedron_returns_exactly_count_poses() {
        let mut opts = LayoutOptions::default();
        opts.tetrahedron.style = TetrahedronStyle::Scattered;
        for count in [0, 1, 5, 99] {
            assert_eq!(
                Layout::Tetrahedron.generate(count, &opts).len(),
                count
            );
        }
    }

    #[test]
    fn every_layout_is_deterministic() {
        let opts = LayoutOptions::default();
        for layout in Layout::ALL {
            assert_eq!(
                layout.generate(64, &opts),
                layout.generate(64, &opts),
                "{layout}"
            );
        }
    }

    #[test]
    fn all_positions_are_finite() {
        let opts = LayoutOptions::default();
        for layout in Layout::ALL {
            for pose in layout.generate(150, &opts) {
                assert!(pose.position.is_finite(), "{layout}");
                assert!(pose.rotation.is_finite(), "{layout}");
            }
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for layout in Layout::ALL {
            assert_eq!(layout.name().parse::<Layout>().unwrap(), layout);
            assert_eq!(layout.to_string(), layout.name());
        }
        assert_eq!(" Sphere ".parse::<Layout>().unwrap(), Layout::Sphere);
        assert_eq!("PYRAMID".parse::<Layout>().unwrap(), Layout::Tetrahedron);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "spiral".parse::<Layout>().unwrap_err();
        assert!(matches!(err, TilescapeError::UnknownLayout(ref n) if n == "spiral"));
        assert!("".parse::<Layout>().is_err());
    }

    #[test]
    fn targets_are_cached_until_reset() {
        let opts = LayoutOptions::default();
        let mut targets = LayoutTargets::new(12);
        assert!(!targets.is_cached(Layout::Helix));

        let first = targets.get(Layout::Helix, &opts).to_vec();
        assert!(targets.is_cached(Layout::Helix));
        assert!(!targets.is_cached(Layout::Sphere));
        assert_eq!(targets.get(Layout::Helix, &opts), first.as_slice());

        targets.reset(5);
        assert!(!targets.is_cached(Layout::Helix));
        assert_eq!(targets.count(), 5);
        assert_eq!(targets.get(Layout::Helix, &opts).len(), 5);
    }
}
