use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// Projection parameters for a viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Width / height.
    pub aspect: f32,
    /// Perspective projection matrix.
    pub matrix: Mat4,
}

impl Projection {
    /// Recompute projection for a new viewport. A zero height is treated as
    /// one pixel.
    #[must_use]
    pub fn for_viewport(
        width: u32,
        height: u32,
        fovy: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        Self {
            width,
            height,
            aspect,
            matrix: Mat4::perspective_rh(fovy.to_radians(), aspect, znear, zfar),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform block handed to the external renderer.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Camera on +Z at `opts.distance`, looking at the origin.
    #[must_use]
    pub fn from_options(opts: &CameraOptions, width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, opts.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width as f32 / height.max(1) as f32,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        self.build_projection() * view
    }

    /// Projection matrix alone.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Apply a viewport resize and return the new projection.
    pub fn resize(&mut self, width: u32, height: u32) -> Projection {
        let projection = Projection::for_viewport(
            width,
            height,
            self.fovy,
            self.znear,
            self.zfar,
        );
        self.aspect = projection.aspect;
        projection
    }

    /// Uniform block reflecting the current camera state.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_matrix().to_cols_array_2d(),
            position: self.eye.to_array(),
            aspect: self.aspect,
            forward: (self.target - self.eye).normalize_or_zero().to_array(),
            fovy: self.fovy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_sits_on_positive_z() {
        let camera = Camera::from_options(&CameraOptions::default(), 1600, 900);
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 3000.0));
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_aspect_and_matches_pure_hook() {
        let mut camera =
            Camera::from_options(&CameraOptions::default(), 800, 600);
        let projection = camera.resize(1000, 500);
        assert_eq!(projection.aspect, 2.0);
        assert_eq!(camera.aspect, 2.0);
        assert_eq!(
            projection,
            Projection::for_viewport(1000, 500, 40.0, 1.0, 10_000.0)
        );
        assert_eq!(camera.build_projection(), projection.matrix);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let projection = Projection::for_viewport(640, 0, 40.0, 1.0, 100.0);
        assert!(projection.aspect.is_finite());
        assert!(projection.matrix.is_finite());
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::from_options(&CameraOptions::default(), 800, 800);
        let clip = camera.build_matrix().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
    }

    #[test]
    fn uniform_is_plain_bytes() {
        let camera = Camera::from_options(&CameraOptions::default(), 800, 600);
        let uniform = camera.uniform();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
    }
}
