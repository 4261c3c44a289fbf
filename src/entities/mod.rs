pub mod polyline;
pub mod primitive;
pub mod skybox;
pub mod sphere;
