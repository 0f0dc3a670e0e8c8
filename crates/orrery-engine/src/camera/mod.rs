pub mod controls;
pub mod focus;
pub mod perspective;

pub use controls::OrbitControls;
pub use focus::{FocusController, FocusPhase};
pub use perspective::{CameraPose, CameraUniform, PerspectiveCamera};
