pub mod affine;
pub mod angle;
pub mod geometry;
