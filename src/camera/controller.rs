use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Orbits the camera around a focus point and zooms along the view axis.
///
/// Distance is clamped to `[min_distance, max_distance]`.
#[derive(Debug, Clone)]
pub struct OrbitController {
    orientation: Quat,
    distance: f32,
    /// `CameraOptions::distance` last applied; zoom state survives option
    /// changes that leave it alone.
    configured_distance: f32,
    focus_point: Vec3,
    min_distance: f32,
    max_distance: f32,
    rotate_speed: f32,
    zoom_speed: f32,

    /// Camera driven by this controller.
    pub camera: Camera,
}

impl OrbitController {
    /// Controller for a `width` x `height` viewport.
    #[must_use]
    pub fn new(opts: &CameraOptions, width: u32, height: u32) -> Self {
        let mut controller = Self {
            orientation: Quat::IDENTITY,
            distance: opts.distance,
            configured_distance: opts.distance,
            focus_point: Vec3::ZERO,
            min_distance: opts.min_distance,
            max_distance: opts.max_distance,
            rotate_speed: opts.rotate_speed * 0.01,
            zoom_speed: opts.zoom_speed,
            camera: Camera::from_options(opts, width, height),
        };
        controller.update_camera_pos();
        controller
    }

    /// Re-read speeds, limits and projection parameters from `opts`. The eye
    /// jumps to `opts.distance` only when that setting itself changed.
    pub fn apply_options(&mut self, opts: &CameraOptions) {
        self.min_distance = opts.min_distance;
        self.max_distance = opts.max_distance;
        self.rotate_speed = opts.rotate_speed * 0.01;
        self.zoom_speed = opts.zoom_speed;
        self.camera.fovy = opts.fovy;
        self.camera.znear = opts.znear;
        self.camera.zfar = opts.zfar;
        if opts.distance != self.configured_distance {
            self.configured_distance = opts.distance;
            self.distance = opts.distance;
        }
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }

    /// Current eye distance from the focus point.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn update_camera_pos(&mut self) {
        let dir = self.orientation * Vec3::Z;

        self.camera.eye = self.focus_point + (dir * self.distance);
        self.camera.target = self.focus_point;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Rotate by a pointer drag delta (pixels).
    pub fn rotate(&mut self, delta: Vec2) {
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.rotate_speed);
        self.orientation = horizontal * self.orientation;

        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.rotate_speed);
        self.orientation = (vertical * self.orientation).normalize();

        self.update_camera_pos();
    }

    /// Zoom by a scroll delta; positive moves closer.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.update_camera_pos();
    }
}
