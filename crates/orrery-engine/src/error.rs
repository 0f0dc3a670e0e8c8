//! Error types for catalog validation and asset loading.

use thiserror::Error;

/// Result type for scene construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A malformed catalog. Always fatal: the scene is not built.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate body id `{0}`")]
    DuplicateBody(String),

    #[error("catalog has no light-emitting body")]
    NoStar,

    #[error("catalog has more than one light-emitting body: `{first}` and `{second}`")]
    MultipleStars { first: String, second: String },

    #[error("body `{body}` is missing required field `{field}`")]
    MissingField { body: String, field: &'static str },

    #[error("body `{body}` has out-of-range {field}: {value}")]
    InvalidValue {
        body: String,
        field: &'static str,
        value: f32,
    },

    #[error("body `{body}` references unknown parent `{parent}`")]
    DanglingParent { body: String, parent: String },

    #[error("body `{body}` cannot be a satellite of the light source `{parent}`")]
    ParentIsStar { body: String, parent: String },

    #[error("satellite `{body}` has parent `{parent}` which is itself a satellite")]
    NestedSatellite { body: String, parent: String },

    #[error("satellite `{body}` declares an orbital inclination")]
    SatelliteInclination { body: String },

    #[error("light source `{body}` cannot have a parent")]
    StarWithParent { body: String },
}

/// A texture that could not be loaded. Recoverable: the texture is treated as absent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("texture `{path}` failed to load: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("texture `{0}` was never requested")]
    Unrequested(String),
}
