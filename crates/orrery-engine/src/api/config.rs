use glam::Vec3;
use serde::Deserialize;

use crate::extensions::Easing;

/// Engine-wide settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrreryConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Cap on logical steps per display frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Prefix for every texture path (default: "assets/textures/").
    pub texture_path: String,
    /// Seed for initial orbit progress.
    pub seed: u32,
    /// Segments in each orbit trace (default: 100).
    pub trace_divisions: usize,
    pub camera: CameraConfig,
    pub focus: FocusConfig,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            texture_path: "assets/textures/".to_string(),
            seed: 42,
            trace_divisions: 100,
            camera: CameraConfig::default(),
            focus: FocusConfig::default(),
        }
    }
}

impl OrreryConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Perspective camera and orbit-control settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Width over height until the first resize.
    pub aspect: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of pending rotation applied per step.
    pub damping: f32,
    /// Radians per unit of drag.
    pub rotate_speed: f32,
    /// Dolly factor base per unit of wheel delta.
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 10000.0,
            aspect: 16.0 / 9.0,
            position: [0.0, 100.0, 200.0],
            target: [0.0, 0.0, 0.0],
            min_distance: 1.0,
            max_distance: 1500.0,
            damping: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
        }
    }
}

impl CameraConfig {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn target(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }
}

/// Focus transition settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusConfig {
    /// Seconds per transition (default: 1.0).
    pub duration: f32,
    pub easing: Easing,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            easing: Easing::QuadOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = OrreryConfig::from_json("{}").unwrap();
        assert_eq!(config, OrreryConfig::default());
        assert_eq!(config.camera.position(), Vec3::new(0.0, 100.0, 200.0));
        assert_eq!(config.focus.easing, Easing::QuadOut);
    }

    #[test]
    fn nested_overrides() {
        let json = r#"{
            "texturePath": "tex/",
            "camera": { "fovDeg": 60, "maxDistance": 900 },
            "focus": { "duration": 0.5, "easing": "linear" }
        }"#;
        let config = OrreryConfig::from_json(json).unwrap();
        assert_eq!(config.texture_path, "tex/");
        assert_eq!(config.camera.fov_deg, 60.0);
        assert_eq!(config.camera.max_distance, 900.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.focus.duration, 0.5);
        assert_eq!(config.focus.easing, Easing::Linear);
        assert_eq!(config.trace_divisions, 100);
    }
}
