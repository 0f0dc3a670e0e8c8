// extensions/mod.rs
//
// Interpolation helpers used by the camera.
// Decoupled from the scene graph; callers own and advance them.

pub mod easing;
pub mod tween;

pub use easing::{Easing, ease_vec3, lerp_vec3};
pub use tween::Tween;
