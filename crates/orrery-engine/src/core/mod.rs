pub mod builder;
pub mod orbit;
pub mod scene;
pub mod simulation;
pub mod time;
