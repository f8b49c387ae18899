use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::types::Globals;

/// Perspective camera aimed at a look-at point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: config.fov_degrees.to_radians(),
            aspect: config.aspect,
            near: config.near,
            far: config.far,
        }
    }

    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Tracks the window size; zero-sized (minimized) windows are ignored
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_globals(&self, light_dir: Vec3, light_color: [f32; 3], ambient: [f32; 3]) -> Globals {
        let light_dir = light_dir.normalize_or_zero();
        Globals {
            view_proj: self.view_proj().to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
            light_dir: [light_dir.x, light_dir.y, light_dir.z, 0.0],
            light_color: [light_color[0], light_color[1], light_color[2], 1.0],
            ambient: [ambient[0], ambient[1], ambient[2], 1.0],
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
