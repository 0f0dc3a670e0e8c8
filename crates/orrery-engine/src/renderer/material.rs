use serde::Serialize;

use crate::api::types::BodyId;
use crate::assets::{TextureHandle, TextureSet, TextureSlot};
use crate::catalog::CelestialBodyDefinition;

/// Bump scale when the catalog gives none.
pub const DEFAULT_BUMP_SCALE: f32 = 0.01;

/// Surface parameters for one body, with absent textures left as `None`.
/// Serialized to JSON for the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMaterial {
    /// The star is drawn unlit.
    pub unlit: bool,
    pub surface: Option<TextureHandle>,
    /// Night-side map driving emission.
    pub night: Option<TextureHandle>,
    pub emissive: bool,
    pub bump: Option<TextureHandle>,
    pub bump_scale: f32,
    pub specular: Option<TextureHandle>,
    pub shininess: f32,
    pub clouds: Option<TextureHandle>,
    pub rings: Option<TextureHandle>,
    /// Glow tint as 0xRRGGBB.
    pub atmosphere_color: Option<u32>,
}

impl BodyMaterial {
    pub fn resolve(body: BodyId, def: &CelestialBodyDefinition, textures: &TextureSet) -> Self {
        let tex = |slot| textures.body(body, slot);
        let night = tex(TextureSlot::Night);
        let specular = tex(TextureSlot::Specular);
        Self {
            unlit: def.is_light,
            surface: tex(TextureSlot::Surface),
            night,
            emissive: night.is_some(),
            bump: tex(TextureSlot::Bump),
            bump_scale: def.textures.bump_scale.unwrap_or(DEFAULT_BUMP_SCALE),
            specular,
            shininess: if specular.is_some() { 100.0 } else { 10.0 },
            clouds: tex(TextureSlot::Clouds),
            rings: tex(TextureSlot::Rings),
            atmosphere_color: def.atmosphere_color,
        }
    }
}
