use super::primitive::{self, Primitive};
use crate::{
    config::Tessellation,
    error::Result,
    math::geometry::polyline,
    primitives::{color::ColorAlpha, vertex::SimpleVertex},
    render::{generic_mesh::GlBuffers, registry::PrimitiveKind, shared::SharedRenderResource},
    resources::ResourceDir,
};
use glow::HasContext;
use nalgebra::{Matrix4, Point3};

/// Open line strip in model space. All polylines share a single vertex buffer that is refilled
/// right before each draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyLine {
    pub model_transform: Matrix4<f32>,
    pub vertices: Vec<Point3<f32>>,
    pub color: ColorAlpha,
}

impl PolyLine {
    pub fn new(vertices: Vec<Point3<f32>>, color: ColorAlpha) -> Self {
        Self {
            model_transform: Matrix4::identity(),
            vertices,
            color,
        }
    }

    pub fn circle(points: usize, color: ColorAlpha) -> Self {
        Self::new(polyline::unit_circle(points), color)
    }

    pub fn draw(
        &self,
        gl: &glow::Context,
        resource: &SharedRenderResource,
        view_projection: &Matrix4<f32>,
    ) {
        if self.vertices.is_empty() {
            return;
        }

        let program = &resource.program;

        resource.bind(gl);
        resource.buffers.stream(gl, &self.vertices);
        program.uniform_matrix_4_f32(
            gl,
            "vertexTransform",
            &(view_projection * self.model_transform),
        );
        program.uniform_4_f32(
            gl,
            "color",
            self.color.r,
            self.color.g,
            self.color.b,
            self.color.a,
        );

        unsafe { gl.draw_arrays(glow::LINE_STRIP, 0, self.vertices.len() as i32) };

        resource.unbind(gl);
    }
}

impl Primitive for PolyLine {
    const KIND: PrimitiveKind = PrimitiveKind::PolyLine;
    const PROGRAM: &'static str = "polyline";

    fn prepare(
        gl: &glow::Context,
        resources: &ResourceDir,
        _tessellation: &Tessellation,
    ) -> Result<SharedRenderResource> {
        let program = primitive::load_program(gl, resources, Self::PROGRAM)?;
        let buffers = GlBuffers::dynamic::<SimpleVertex>(gl)?;

        Ok(SharedRenderResource::new(program, buffers, 0))
    }
}
