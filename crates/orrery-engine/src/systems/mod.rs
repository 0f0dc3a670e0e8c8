pub mod labels;
pub mod picking;
pub mod render;

pub use labels::{label_opacity, LabelVisibility};
pub use picking::{intersect_ring, intersect_sphere, pick, PickHit, Ray};
pub use render::build_render_buffer;
