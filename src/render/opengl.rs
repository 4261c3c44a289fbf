use crate::error::{Error, Result};
use glow::HasContext;

pub fn init_vao<F: FnOnce() -> Result<()>>(gl: &glow::Context, initializer: F) -> Result<u32> {
    unsafe {
        let vertex_array = gl.create_vertex_array().map_err(Error::GlObject)?;
        gl.bind_vertex_array(Some(vertex_array));
        let initialized = initializer();
        gl.bind_vertex_array(None);
        initialized?;

        Ok(vertex_array)
    }
}

pub fn create_buffer(gl: &glow::Context) -> Result<u32> {
    unsafe { gl.create_buffer() }.map_err(Error::GlObject)
}
