// catalog/mod.rs
//
// Static body configuration. Loaded once at startup, immutable afterwards.

pub mod builtin;
pub mod definition;

pub use definition::{BodyDetails, BodyRole, BodyTextures, CelestialBodyDefinition};

use crate::api::types::BodyId;
use crate::error::{ConfigError, ConfigResult};

/// One catalog record: the body's string key and its definition.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: String,
    pub definition: CelestialBodyDefinition,
}

/// Ordered collection of body definitions.
/// `BodyId` values index into this order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON object mapping body id to definition.
    /// Document order is preserved.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (id, value) in map {
            let definition: CelestialBodyDefinition = serde_json::from_value(value)?;
            catalog.insert(id, definition)?;
        }
        Ok(catalog)
    }

    /// Add a body. Ids must be unique.
    pub fn insert(&mut self, id: impl Into<String>, definition: CelestialBodyDefinition) -> ConfigResult<BodyId> {
        let id = id.into();
        if self.find(&id).is_some() {
            return Err(ConfigError::DuplicateBody(id));
        }
        self.entries.push(CatalogEntry { id, definition });
        Ok(BodyId(self.entries.len() as u32 - 1))
    }

    /// Look up a body by its string key.
    pub fn find(&self, id: &str) -> Option<BodyId> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .map(|i| BodyId(i as u32))
    }

    pub fn get(&self, body: BodyId) -> Option<&CelestialBodyDefinition> {
        self.entries.get(body.index()).map(|e| &e.definition)
    }

    /// The string key of a body.
    pub fn id(&self, body: BodyId) -> Option<&str> {
        self.entries.get(body.index()).map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &str, &CelestialBodyDefinition)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (BodyId(i as u32), e.id.as_str(), &e.definition))
    }

    /// The first body flagged as the light source.
    pub fn star(&self) -> Option<BodyId> {
        self.iter().find(|(_, _, def)| def.is_light).map(|(body, _, _)| body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_document_order() {
        let json = r#"{
            "sun": { "title": "Sun", "radius": 10, "isLight": true },
            "earth": { "title": "Earth", "radius": 1, "orbitalRadius": 45, "orbitalPeriod": 0.003 },
            "moon": { "title": "Moon", "radius": 0.27, "orbitalRadius": 3, "orbitalPeriod": 0.05, "parent": "earth" }
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.id(BodyId(0)), Some("sun"));
        assert_eq!(catalog.id(BodyId(2)), Some("moon"));
        assert_eq!(catalog.find("earth"), Some(BodyId(1)));
        assert_eq!(catalog.star(), Some(BodyId(0)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert("sun", CelestialBodyDefinition::star("Sun", 10.0)).unwrap();
        let err = catalog
            .insert("sun", CelestialBodyDefinition::star("Other", 5.0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateBody(ref id) if id == "sun"));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Catalog::from_json(r#"{ "sun": { "title": "Sun" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "missing radius should fail: {err}");
    }
}
