use glam::Vec3;

use crate::api::types::BodyId;
use crate::core::builder::SolarScene;

/// Label opacity for a body of `radius` seen from `distance`.
///
/// Fully opaque beyond `radius·20 + 10`, fully transparent inside
/// `radius·10 + 5`, linear in between.
#[inline]
pub fn label_opacity(distance: f32, radius: f32) -> f32 {
    let fade_start = radius * 20.0 + 10.0;
    let fade_end = radius * 10.0 + 5.0;
    if distance >= fade_start {
        return 1.0;
    }
    ((distance - fade_end) / (fade_start - fade_end)).clamp(0.0, 1.0)
}

/// Per-body label opacity, recomputed every frame from the camera position.
/// Runs regardless of pause; the fade depends on the camera, not the simulation.
#[derive(Debug, Clone, Default)]
pub struct LabelVisibility {
    opacity: Vec<Option<f32>>,
}

impl LabelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, scene: &SolarScene, camera_position: Vec3) {
        self.opacity.clear();
        for body in scene.bodies() {
            let has_label = scene.nodes(body).is_some_and(|n| n.label.is_some());
            let value = match (has_label, scene.world_position(body), scene.radius(body)) {
                (true, Some(position), Some(radius)) => {
                    Some(label_opacity(camera_position.distance(position), radius))
                }
                _ => None,
            };
            self.opacity.push(value);
        }
    }

    /// `None` for bodies without a label (the star).
    pub fn opacity(&self, body: BodyId) -> Option<f32> {
        self.opacity.get(body.index()).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, f32)> + '_ {
        self.opacity
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.map(|v| (BodyId(i as u32), v)))
    }
}
