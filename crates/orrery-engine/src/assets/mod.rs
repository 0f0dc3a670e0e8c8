pub mod loader;
pub mod manifest;

pub use loader::{load_all, PendingTextures, TextureHandle, TextureSet, TextureSource};
pub use manifest::{TextureKey, TextureManifest, TextureRequest, TextureSlot};
