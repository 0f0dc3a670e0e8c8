use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::api::config::CameraConfig;
use crate::systems::picking::Ray;

/// Where the camera is and what it looks at. Up is always +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }
}

/// Perspective projection. The pose is kept separately so controls and
/// focus transitions can drive it without touching the lens.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub eye: [f32; 4],
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_deg.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.fov_deg, config.aspect, config.near, config.far)
    }

    pub fn view_matrix(&self, pose: &CameraPose) -> Mat4 {
        Mat4::look_at_rh(pose.position, pose.target, Vec3::Y)
    }

    /// OpenGL-style clip space, Z in [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, pose: &CameraPose) -> Mat4 {
        self.projection_matrix() * self.view_matrix(pose)
    }

    pub fn uniform(&self, pose: &CameraPose) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection(pose).to_cols_array_2d(),
            eye: pose.position.extend(1.0).to_array(),
        }
    }

    /// Viewport changed. Only the aspect ratio is affected; zero sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Ray from the eye through a pointer position in normalized device
    /// coordinates (x right, y up, both in [-1, 1]).
    pub fn ray_through(&self, pose: &CameraPose, ndc: Vec2) -> Ray {
        let forward = (pose.target - pose.position).try_normalize().unwrap_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        let half_height = (self.fov_y * 0.5).tan();
        let direction = forward
            + right * (ndc.x * half_height * self.aspect)
            + up * (ndc.y * half_height);
        Ray::new(pose.position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> (PerspectiveCamera, CameraPose) {
        (
            PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 10000.0),
            CameraPose::new(Vec3::new(0.0, 100.0, 200.0), Vec3::ZERO),
        )
    }

    #[test]
    fn center_ray_points_at_target() {
        let (cam, pose) = camera();
        let ray = cam.ray_through(&pose, Vec2::ZERO);
        let expected = (pose.target - pose.position).normalize();
        assert!((ray.direction - expected).length() < 1e-4, "{}", ray.direction);
        assert_eq!(ray.origin, pose.position);
    }

    #[test]
    fn project_and_ray_agree() {
        let (cam, pose) = camera();
        let point = Vec3::new(30.0, 5.0, -20.0);
        let ndc = cam.view_projection(&pose).project_point3(point);
        let ray = cam.ray_through(&pose, ndc.truncate());
        let to_point = (point - pose.position).normalize();
        assert!((ray.direction - to_point).length() < 1e-3);
    }

    #[test]
    fn resize_changes_aspect_only() {
        let (mut cam, _) = camera();
        let fov = cam.fov_y;
        cam.resize(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
        assert_eq!(cam.fov_y, fov);
        cam.resize(0.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn uniform_is_twenty_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        let (cam, pose) = camera();
        assert_eq!(cam.uniform(&pose).eye, [0.0, 100.0, 200.0, 1.0]);
    }
}
