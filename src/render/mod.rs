pub mod generic_mesh;
pub mod gl_program;
pub mod gl_texture;
pub mod opengl;
pub mod registry;
pub mod shader;
pub mod shared;
pub mod texture;
