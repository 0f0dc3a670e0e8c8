pub mod instance;
pub mod material;

pub use instance::{NodeInstance, RenderBuffer};
pub use material::BodyMaterial;
