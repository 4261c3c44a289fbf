pub mod cube;
pub mod polyline;
pub mod sphere;
