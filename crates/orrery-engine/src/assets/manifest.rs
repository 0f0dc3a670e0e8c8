use serde::Serialize;

use crate::api::types::BodyId;
use crate::catalog::builtin::{GLOW_TEXTURE, STARFIELD_TEXTURE};
use crate::catalog::Catalog;

/// Which map of a body a texture feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextureSlot {
    Surface,
    /// Emissive night-side map.
    Night,
    Bump,
    Specular,
    Clouds,
    Rings,
}

/// Identifies one texture request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TextureKey {
    Body { body: BodyId, slot: TextureSlot },
    /// Scene background.
    Starfield,
    /// Shared atmosphere glow sprite.
    Glow,
}

/// A texture the host must load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureRequest {
    pub key: TextureKey,
    /// Full path, base path included.
    pub path: String,
}

/// Every texture the scene wants, derived from the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextureManifest {
    requests: Vec<TextureRequest>,
}

impl TextureManifest {
    /// Collect requests for the scene textures and every body's maps.
    /// Ring textures are requested only for bodies flagged `hasRings`.
    pub fn from_catalog(catalog: &Catalog, base_path: &str) -> Self {
        let mut manifest = Self::default();
        manifest.push(TextureKey::Starfield, base_path, STARFIELD_TEXTURE);
        manifest.push(TextureKey::Glow, base_path, GLOW_TEXTURE);

        for (body, _, def) in catalog.iter() {
            let t = &def.textures;
            let slots = [
                (TextureSlot::Surface, t.surface.as_deref()),
                (TextureSlot::Night, t.night_texture.as_deref()),
                (TextureSlot::Bump, t.bump_texture.as_deref()),
                (TextureSlot::Specular, t.specular_texture.as_deref()),
                (TextureSlot::Clouds, t.cloud_texture.as_deref()),
                (TextureSlot::Rings, t.ring_texture.as_deref().filter(|_| def.has_rings)),
            ];
            for (slot, file) in slots {
                if let Some(file) = file {
                    manifest.push(TextureKey::Body { body, slot }, base_path, file);
                }
            }
        }
        manifest
    }

    fn push(&mut self, key: TextureKey, base_path: &str, file: &str) {
        self.requests.push(TextureRequest {
            key,
            path: format!("{base_path}{file}"),
        });
    }

    pub fn requests(&self) -> &[TextureRequest] {
        &self.requests
    }

    /// Distinct paths in request order. Several keys may share a path.
    pub fn paths(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.requests.len());
        for req in &self.requests {
            if !out.contains(&req.path.as_str()) {
                out.push(&req.path);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
