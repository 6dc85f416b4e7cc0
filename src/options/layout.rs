use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Geometry constants for every named layout.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Layouts", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Flat row-major table.
    pub table: TableOptions,
    /// Golden-section sphere.
    pub sphere: SphereOptions,
    /// Cylindrical (double) helix.
    pub helix: HelixOptions,
    /// 3D box grid.
    pub grid: GridOptions,
    /// Triangular pyramid.
    pub tetrahedron: TetrahedronOptions,
}

/// Table layout: `x = col * column_spacing - offset_x`,
/// `y = -row * row_spacing + offset_y`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Table", inline)]
#[serde(default)]
pub struct TableOptions {
    /// Tiles per row.
    #[schemars(title = "Columns", range(min = 1, max = 100))]
    pub columns: u32,
    /// Horizontal distance between column centers.
    pub column_spacing: f32,
    /// Vertical distance between row centers.
    pub row_spacing: f32,
    /// Shift applied so the table is horizontally centered.
    pub offset_x: f32,
    /// Shift applied so the table is vertically centered.
    pub offset_y: f32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            columns: 20,
            column_spacing: 140.0,
            row_spacing: 180.0,
            offset_x: 1330.0,
            offset_y: 990.0,
        }
    }
}

/// Sphere layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sphere", inline)]
#[serde(default)]
pub struct SphereOptions {
    /// Sphere radius.
    #[schemars(title = "Radius", range(min = 100.0, max = 3000.0))]
    pub radius: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self { radius: 800.0 }
    }
}

/// Helix layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
pub struct HelixOptions {
    /// Cylinder radius.
    pub radius: f32,
    /// Angle advanced per tile, in radians.
    pub angular_step: f32,
    /// Angle of tile 0, in radians.
    pub phase: f32,
    /// Drop in height per tile.
    pub vertical_step: f32,
    /// Height of tile 0.
    pub offset_y: f32,
    /// Alternate tiles between two strands half a turn apart.
    #[schemars(title = "Double Strand")]
    pub double_strand: bool,
}

impl Default for HelixOptions {
    fn default() -> Self {
        Self {
            radius: 900.0,
            angular_step: 0.175,
            phase: std::f32::consts::PI,
            vertical_step: 8.0,
            offset_y: 450.0,
            double_strand: true,
        }
    }
}

/// Grid layout: `columns` wide, `rows` high, a new depth layer every
/// `columns * rows` tiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Grid", inline)]
#[serde(default)]
pub struct GridOptions {
    /// Tiles per row.
    #[schemars(range(min = 1, max = 50))]
    pub columns: u32,
    /// Rows per depth layer.
    #[schemars(range(min = 1, max = 50))]
    pub rows: u32,
    /// Spacing along x.
    pub spacing_x: f32,
    /// Spacing along y.
    pub spacing_y: f32,
    /// Spacing between depth layers along z.
    pub spacing_z: f32,
    /// Centering shift along x.
    pub offset_x: f32,
    /// Centering shift along y.
    pub offset_y: f32,
    /// Centering shift along z.
    pub offset_z: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 4,
            spacing_x: 400.0,
            spacing_y: 400.0,
            spacing_z: 1000.0,
            offset_x: 800.0,
            offset_y: 800.0,
            offset_z: 2000.0,
        }
    }
}

/// How tetrahedron positions are produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TetrahedronStyle {
    /// Layer-by-layer triangular stacking, apex up.
    #[default]
    Stacked,
    /// Seeded random points on the four faces of a regular tetrahedron.
    Scattered,
}

/// Tetrahedron layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Tetrahedron", inline)]
#[serde(default)]
pub struct TetrahedronOptions {
    /// Stacked or scattered placement.
    #[schemars(title = "Style")]
    pub style: TetrahedronStyle,
    /// Distance between neighbouring slots within a layer (stacked).
    pub spacing: f32,
    /// Height of one layer (stacked).
    pub layer_height: f32,
    /// Circumradius of the tetrahedron (scattered).
    pub size: f32,
    /// RNG seed for scattered placement.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for TetrahedronOptions {
    fn default() -> Self {
        Self {
            style: TetrahedronStyle::Stacked,
            spacing: 200.0,
            // Regular stacking: spacing * sqrt(2/3).
            layer_height: 163.3,
            size: 1200.0,
            seed: 0x7e7a,
        }
    }
}
