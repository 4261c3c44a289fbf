use super::{generic_mesh::GlBuffers, gl_program::GlProgram};
use glow::HasContext;

/// GPU state shared by every instance of one primitive type: the compiled program and the
/// buffers holding the type's geometry.
pub struct SharedRenderResource {
    pub program: GlProgram,
    pub buffers: GlBuffers,
    /// Index count for indexed meshes, vertex count otherwise. Zero for streamed buffers.
    pub element_count: u32,
}

impl SharedRenderResource {
    pub fn new(program: GlProgram, buffers: GlBuffers, element_count: u32) -> Self {
        Self {
            program,
            buffers,
            element_count,
        }
    }

    pub fn bind(&self, gl: &glow::Context) {
        self.program.use_by(gl);
        unsafe { gl.bind_vertex_array(Some(self.buffers.vertex_array)) };
    }

    pub fn unbind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(None) };
    }
}
