pub mod api;
pub mod assets;
pub mod camera;
pub mod catalog;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::app::Orrery;
pub use api::config::{CameraConfig, FocusConfig, OrreryConfig};
pub use api::types::{BodyId, NodeId, UiEvent};
pub use assets::{load_all, PendingTextures, TextureHandle, TextureManifest, TextureSet, TextureSource};
pub use camera::{CameraPose, CameraUniform, FocusController, FocusPhase, OrbitControls, PerspectiveCamera};
pub use catalog::builtin::solar_system;
pub use catalog::{BodyDetails, Catalog, CelestialBodyDefinition};
pub use crate::core::builder::{build_scene, SolarScene};
pub use crate::core::orbit::OrbitPath;
pub use crate::core::scene::{LocalTransform, NodeKind, SceneGraph};
pub use crate::core::simulation::{BodyState, Simulation};
pub use crate::core::time::FixedTimestep;
pub use error::{AssetError, ConfigError, ConfigResult};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{NodeInstance, RenderBuffer};
pub use renderer::material::BodyMaterial;
pub use systems::labels::{label_opacity, LabelVisibility};
pub use systems::picking::{pick, PickHit, Ray};

// Extensions: decoupled helpers
pub use extensions::{ease_vec3, lerp_vec3, Easing, Tween};
