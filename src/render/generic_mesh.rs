use super::opengl;
use crate::{error::Result, primitives::vertex::Vertex, utils};
use glow::HasContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Triangle(pub [u32; 3]);

#[derive(Clone, Debug)]
pub struct Mesh<V: Vertex> {
    pub vertices: Vec<V>,
    pub triangles: Vec<Triangle>,
}

/// Buffer objects holding a mesh on the GPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlBuffers {
    pub vertex_array: u32,
    pub vertex_buffer: u32,
    pub element_buffer: Option<u32>,
}

impl GlBuffers {
    /// Static indexed mesh, uploaded once.
    pub fn indexed<V: Vertex>(gl: &glow::Context, mesh: &Mesh<V>) -> Result<Self> {
        let vertex_buffer = opengl::create_buffer(gl)?;
        let element_buffer = opengl::create_buffer(gl)?;

        let vertex_array = opengl::init_vao(gl, || {
            unsafe {
                gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
                gl.buffer_data_u8_slice(
                    glow::ARRAY_BUFFER,
                    utils::slice_as_raw(&mesh.vertices),
                    glow::STATIC_DRAW,
                );

                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(element_buffer));
                gl.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    utils::slice_as_raw(&mesh.triangles),
                    glow::STATIC_DRAW,
                );
            }

            V::set_vertex_attrib_pointers(gl);
            Ok(())
        })?;

        Ok(Self {
            vertex_array,
            vertex_buffer,
            element_buffer: Some(element_buffer),
        })
    }

    /// Static non-indexed vertex list, uploaded once.
    pub fn arrays<V: Vertex>(gl: &glow::Context, vertices: &[V]) -> Result<Self> {
        let buffers = Self::dynamic::<V>(gl)?;

        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffers.vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                utils::slice_as_raw(vertices),
                glow::STATIC_DRAW,
            );
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }

        Ok(buffers)
    }

    /// Empty vertex buffer meant to be overwritten with [`GlBuffers::stream`] before every draw.
    pub fn dynamic<V: Vertex>(gl: &glow::Context) -> Result<Self> {
        let vertex_buffer = opengl::create_buffer(gl)?;

        let vertex_array = opengl::init_vao(gl, || {
            unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer)) };
            V::set_vertex_attrib_pointers(gl);
            Ok(())
        })?;

        Ok(Self {
            vertex_array,
            vertex_buffer,
            element_buffer: None,
        })
    }

    pub fn stream<T>(&self, gl: &glow::Context, vertices: &[T]) {
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                utils::slice_as_raw(vertices),
                glow::STREAM_DRAW,
            );
        }
    }
}
