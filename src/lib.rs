pub mod camera;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod math;
pub mod mouse;
pub mod primitives;
pub mod render;
pub mod resources;
pub mod scene;
pub mod simulation;
pub mod utils;
pub mod window;
