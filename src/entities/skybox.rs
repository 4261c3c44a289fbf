use super::primitive::{self, Primitive};
use crate::{
    config::Tessellation,
    error::Result,
    math::geometry::cube::SKYBOX_VERTICES,
    primitives::vertex::SimpleVertex,
    render::{
        generic_mesh::GlBuffers, gl_texture::GlCubeTexture, registry::PrimitiveKind,
        shared::SharedRenderResource,
    },
    resources::ResourceDir,
};
use glow::HasContext;
use nalgebra::{Matrix4, Point3};

/// Cube-mapped backdrop drawn around the camera without writing depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyBox {
    pub texture: GlCubeTexture,
}

impl SkyBox {
    pub fn new(texture: GlCubeTexture) -> Self {
        Self { texture }
    }

    /// `sky_view_projection` must not contain the camera translation.
    pub fn draw(
        &self,
        gl: &glow::Context,
        resource: &SharedRenderResource,
        sky_view_projection: &Matrix4<f32>,
    ) {
        unsafe { gl.depth_mask(false) };

        resource.bind(gl);
        resource
            .program
            .uniform_matrix_4_f32(gl, "vertexTransform", sky_view_projection);

        unsafe {
            gl.active_texture(glow::TEXTURE0);
            self.texture.bind(gl);
            gl.draw_arrays(glow::TRIANGLES, 0, resource.element_count as i32);
        }

        resource.unbind(gl);

        unsafe { gl.depth_mask(true) };
    }
}

impl Primitive for SkyBox {
    const KIND: PrimitiveKind = PrimitiveKind::SkyBox;
    const PROGRAM: &'static str = "skybox";

    fn prepare(
        gl: &glow::Context,
        resources: &ResourceDir,
        _tessellation: &Tessellation,
    ) -> Result<SharedRenderResource> {
        let program = primitive::load_program(gl, resources, Self::PROGRAM)?;
        let vertices = SKYBOX_VERTICES.map(|position| SimpleVertex(Point3::from(position)));
        let buffers = GlBuffers::arrays(gl, &vertices)?;

        Ok(SharedRenderResource::new(
            program,
            buffers,
            vertices.len() as u32,
        ))
    }
}
