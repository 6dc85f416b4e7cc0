//! Tile pose: position plus XYZ Euler orientation.

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Cross products shorter than this are treated as parallel vectors.
const PARALLEL_EPSILON: f32 = 1e-12;

/// Position and orientation of a tile.
///
/// Orientation is stored as intrinsic XYZ Euler angles in radians, the same
/// representation the transition scheduler interpolates component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl Pose {
    /// Pose at the origin with no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    /// Pose at `position` with the default (unrotated) facing.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Pose at `position` whose local +Z axis points at `target`, with world
    /// +Y as up.
    #[must_use]
    pub fn facing(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            rotation: look_at_euler(position, target),
        }
    }

    /// Pose at `position` facing away from the origin, i.e. looking at the
    /// point twice as far out along the same direction.
    #[must_use]
    pub fn facing_outward(position: Vec3) -> Self {
        Self::facing(position, position * 2.0)
    }

    /// Orientation as a quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix (rotation then translation) for the renderer.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.quat(), self.position)
    }
}

/// Euler angles rotating local +Z toward `target - position`.
fn look_at_euler(position: Vec3, target: Vec3) -> Vec3 {
    let mut z = target - position;
    if z.length_squared() < PARALLEL_EPSILON {
        z = Vec3::Z;
    }
    z = z.normalize();

    let mut x = Vec3::Y.cross(z);
    if x.length_squared() < PARALLEL_EPSILON {
        // Looking straight up or down: nudge off the up axis.
        if z.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = Vec3::Y.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);

    let (a, b, c) =
        Quat::from_mat3(&Mat3::from_cols(x, y, z)).to_euler(EulerRot::XYZ);
    Vec3::new(a, b, c)
}
