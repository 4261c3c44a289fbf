use glow::HasContext;
use nalgebra::{Point2, Point3};

pub trait Vertex {
    fn set_vertex_attrib_pointers(gl: &glow::Context);
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Point3<f32>,
    pub uv: Point2<f32>,
}

impl TexturedVertex {
    pub fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            uv: Point2::new(u, v),
        }
    }
}

impl Vertex for TexturedVertex {
    fn set_vertex_attrib_pointers(gl: &glow::Context) {
        unsafe {
            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                std::mem::size_of::<TexturedVertex>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(0);

            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                std::mem::size_of::<TexturedVertex>() as i32,
                std::mem::size_of::<Point3<f32>>() as i32,
            );
            gl.enable_vertex_attrib_array(1);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct SimpleVertex(pub Point3<f32>);

impl Vertex for SimpleVertex {
    fn set_vertex_attrib_pointers(gl: &glow::Context) {
        unsafe {
            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                std::mem::size_of::<SimpleVertex>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(0);
        }
    }
}
