pub mod color;
pub mod vertex;
