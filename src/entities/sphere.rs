use super::primitive::{self, Primitive};
use crate::{
    config::Tessellation,
    error::Result,
    math::geometry::polyline,
    render::{
        generic_mesh::GlBuffers, gl_texture::GlTexture, registry::PrimitiveKind,
        shared::SharedRenderResource,
    },
    resources::ResourceDir,
    simulation::Light,
};
use glow::HasContext;
use nalgebra::{Matrix4, Point3, Vector3};

/// Per-frame inputs of the sphere lighting model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereLighting {
    pub camera_position: Point3<f32>,
    pub light: Light,
    pub ignore_textures: bool,
}

/// Textured sphere of a given radius. The shared mesh is a unit sphere scaled in the vertex
/// shader.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub model_transform: Matrix4<f32>,
    pub radius: f32,
    pub texture: GlTexture,
}

impl Sphere {
    pub fn new(radius: f32, texture: GlTexture) -> Self {
        Self {
            model_transform: Matrix4::identity(),
            radius,
            texture,
        }
    }

    pub fn center(&self) -> Point3<f32> {
        self.model_transform.transform_point(&Point3::origin())
    }

    pub fn axis_segment(&self, axis: &Vector3<f32>) -> Vec<Point3<f32>> {
        polyline::axis_segment(axis, self.radius)
    }

    pub fn draw(
        &self,
        gl: &glow::Context,
        resource: &SharedRenderResource,
        view_projection: &Matrix4<f32>,
        lighting: &SphereLighting,
    ) {
        let program = &resource.program;
        let vertex_transform = view_projection * self.model_transform;

        resource.bind(gl);
        program.uniform_f32(gl, "r", self.radius);
        program.uniform_matrix_4_f32(gl, "modelTransform", &self.model_transform);
        program.uniform_matrix_4_f32(gl, "vertexTransform", &vertex_transform);
        program.uniform_point_3_f32(gl, "cameraPos", &lighting.camera_position);
        program.uniform_3_f32(gl, "lightDirection", &lighting.light.direction);
        program.uniform_3_f32(gl, "lightColor", &lighting.light.color);
        program.uniform_f32(
            gl,
            "ignoreTextures",
            if lighting.ignore_textures { 1.0 } else { 0.0 },
        );

        unsafe {
            gl.active_texture(glow::TEXTURE0);
            self.texture.bind(gl);
            gl.draw_elements(
                glow::TRIANGLES,
                resource.element_count as i32,
                glow::UNSIGNED_INT,
                0,
            );
        }

        resource.unbind(gl);
    }
}

impl Primitive for Sphere {
    const KIND: PrimitiveKind = PrimitiveKind::Sphere;
    const PROGRAM: &'static str = "sphere";

    fn prepare(
        gl: &glow::Context,
        resources: &ResourceDir,
        tessellation: &Tessellation,
    ) -> Result<SharedRenderResource> {
        let sphere = tessellation.sphere()?;
        let mesh = sphere.mesh();
        log::info!(
            "Prepared sphere. Vertices: {} Indexes: {}",
            mesh.vertices.len(),
            3 * mesh.triangles.len()
        );

        let program = primitive::load_program(gl, resources, Self::PROGRAM)?;
        let buffers = GlBuffers::indexed(gl, &mesh)?;

        Ok(SharedRenderResource::new(
            program,
            buffers,
            sphere.index_count() as u32,
        ))
    }
}
