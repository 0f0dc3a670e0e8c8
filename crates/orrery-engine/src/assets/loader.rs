// assets/loader.rs
//
// Collective texture loading. Every request is tracked until it has an
// outcome; the scene is built from the settled set. Failures never abort.

use std::collections::HashMap;
use serde::Serialize;

use crate::api::types::BodyId;
use crate::error::AssetError;
use super::manifest::{TextureKey, TextureManifest, TextureSlot};

/// Opaque handle assigned by whoever actually loaded the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextureHandle(pub u32);

/// Something that can load a texture synchronously.
/// The browser bridge reports outcomes asynchronously through `PendingTextures` instead.
pub trait TextureSource {
    fn load(&mut self, path: &str) -> Result<TextureHandle, AssetError>;
}

/// Textures that loaded successfully, keyed by request.
/// A missing key means "no texture".
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    handles: HashMap<TextureKey, TextureHandle>,
    failures: Vec<AssetError>,
}

impl TextureSet {
    /// A set with nothing loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: TextureKey) -> Option<TextureHandle> {
        self.handles.get(&key).copied()
    }

    pub fn body(&self, body: BodyId, slot: TextureSlot) -> Option<TextureHandle> {
        self.get(TextureKey::Body { body, slot })
    }

    pub fn starfield(&self) -> Option<TextureHandle> {
        self.get(TextureKey::Starfield)
    }

    pub fn glow(&self) -> Option<TextureHandle> {
        self.get(TextureKey::Glow)
    }

    /// Record a handle directly.
    pub fn insert(&mut self, key: TextureKey, handle: TextureHandle) {
        self.handles.insert(key, handle);
    }

    pub fn failures(&self) -> &[AssetError] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Outstanding texture loads, one slot per distinct path.
#[derive(Debug)]
pub struct PendingTextures {
    manifest: TextureManifest,
    outcomes: HashMap<String, Option<Result<TextureHandle, AssetError>>>,
}

impl PendingTextures {
    pub fn new(manifest: TextureManifest) -> Self {
        let outcomes = manifest
            .paths()
            .into_iter()
            .map(|p| (p.to_string(), None))
            .collect();
        Self { manifest, outcomes }
    }

    pub fn manifest(&self) -> &TextureManifest {
        &self.manifest
    }

    /// Report a successful load. Errors if `path` was never requested.
    pub fn record_loaded(&mut self, path: &str, handle: TextureHandle) -> Result<(), AssetError> {
        self.record(path, Ok(handle))
    }

    /// Report a failed load. The texture will be treated as absent.
    pub fn record_failed(&mut self, path: &str, reason: &str) -> Result<(), AssetError> {
        let err = AssetError::LoadFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        };
        log::warn!("{err}");
        self.record(path, Err(err))
    }

    fn record(&mut self, path: &str, outcome: Result<TextureHandle, AssetError>) -> Result<(), AssetError> {
        match self.outcomes.get_mut(path) {
            Some(slot) => {
                *slot = Some(outcome);
                Ok(())
            }
            None => Err(AssetError::Unrequested(path.to_string())),
        }
    }

    /// Number of paths still waiting for an outcome.
    pub fn remaining(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_none()).count()
    }

    /// Whether every request has an outcome.
    pub fn is_settled(&self) -> bool {
        self.remaining() == 0
    }

    /// Resolve the set once settled. Returns `None` while loads are outstanding.
    pub fn finish(&self) -> Option<TextureSet> {
        if !self.is_settled() {
            return None;
        }

        let mut set = TextureSet::empty();
        for req in self.manifest.requests() {
            if let Some(Some(Ok(handle))) = self.outcomes.get(&req.path) {
                set.insert(req.key, *handle);
            }
        }
        for path in self.manifest.paths() {
            if let Some(Some(Err(err))) = self.outcomes.get(path) {
                set.failures.push(err.clone());
            }
        }
        Some(set)
    }
}

/// Load every texture in `manifest` through `source` and wait for all outcomes.
pub fn load_all(manifest: &TextureManifest, source: &mut dyn TextureSource) -> TextureSet {
    let mut pending = PendingTextures::new(manifest.clone());
    let paths: Vec<String> = manifest.paths().into_iter().map(String::from).collect();
    for path in &paths {
        // Paths come from the manifest, so recording cannot be unrequested
        let _ = match source.load(path) {
            Ok(handle) => pending.record_loaded(path, handle),
            Err(AssetError::LoadFailed { reason, .. }) => pending.record_failed(path, &reason),
            Err(other) => pending.record_failed(path, &other.to_string()),
        };
    }
    pending.finish().unwrap_or_default()
}
