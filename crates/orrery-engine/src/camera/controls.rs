// camera/controls.rs
//
// Free-camera orbit controls: rotate around the target on a sphere, dolly
// in and out, with pending rotation bled off by a damping factor.

use std::f32::consts::{PI, TAU};
use glam::Vec3;

use crate::api::config::CameraConfig;
use super::perspective::CameraPose;

/// Keeps the polar angle off the poles so `look_at` stays defined.
const POLE_EPSILON: f32 = 1e-6;
/// Dolly factor per unit of wheel delta at zoom speed 1.
const ZOOM_BASE: f32 = 0.95;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of pending rotation applied per update.
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitControls {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping: config.damping.clamp(0.0, 1.0),
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Drag by a fraction of the viewport height. Positive `dx` swings the
    /// camera left around the target, positive `dy` tilts it up.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_theta -= TAU * dx * self.rotate_speed;
        self.pending_phi -= TAU * dy * self.rotate_speed;
    }

    /// Wheel input. Positive moves away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.pending_scale *= ZOOM_BASE.powf(-delta * self.zoom_speed);
    }

    /// Whether any rotation or dolly is still pending.
    pub fn is_idle(&self) -> bool {
        self.pending_theta.abs() < 1e-6 && self.pending_phi.abs() < 1e-6 && self.pending_scale == 1.0
    }

    /// Apply pending input to the pose. Leaves an idle pose untouched when
    /// it is already within the distance limits.
    pub fn update(&mut self, pose: &mut CameraPose) {
        let offset = pose.position - pose.target;
        let radius = offset.length();
        let in_range = (self.min_distance..=self.max_distance).contains(&radius);
        if self.is_idle() && in_range {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
            return;
        }
        if radius <= f32::EPSILON {
            return;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.pending_theta * self.damping;
        phi += self.pending_phi * self.damping;
        phi = phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);

        let radius = (radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        pose.position = pose.target
            + Vec3::new(radius * sin_phi * theta.sin(), radius * phi.cos(), radius * sin_phi * theta.cos());

        self.pending_theta *= 1.0 - self.damping;
        self.pending_phi *= 1.0 - self.damping;
        self.pending_scale = 1.0;
    }
}
