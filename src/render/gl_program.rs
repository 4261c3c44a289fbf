use super::shader::Shader;
use crate::error::{Error, Result};
use glow::{self, HasContext};
use nalgebra::{Matrix4, Point3, Vector3};
use std::path::Path;

pub struct GlProgram {
    handle: u32,
}

impl GlProgram {
    pub fn with_shader_paths(
        gl: &glow::Context,
        shader_paths: Vec<(&Path, u32)>,
    ) -> Result<GlProgram> {
        let mut shaders = Vec::with_capacity(shader_paths.len());
        for (path, kind) in &shader_paths {
            match Shader::from_file(gl, path, *kind) {
                Ok(shader) => shaders.push(shader),
                Err(error) => {
                    shaders.into_iter().for_each(|shader| shader.delete(gl));
                    return Err(error);
                }
            }
        }

        let handle = unsafe { gl.create_program() }.map_err(Error::GlObject)?;

        unsafe {
            for shader in &shaders {
                gl.attach_shader(handle, shader.handle());
            }

            gl.link_program(handle);

            for shader in shaders {
                gl.detach_shader(handle, shader.handle());
                shader.delete(gl);
            }

            if !gl.get_program_link_status(handle) {
                let log = gl.get_program_info_log(handle);
                gl.delete_program(handle);

                return Err(Error::ShaderLink {
                    program: shader_paths
                        .iter()
                        .map(|(path, _)| path.display().to_string())
                        .collect::<Vec<_>>()
                        .join(" + "),
                    log,
                });
            }
        }

        Ok(GlProgram { handle })
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn use_by(&self, gl: &glow::Context) {
        unsafe {
            gl.use_program(Some(self.handle));
        }
    }

    pub fn uniform_matrix_4_f32(&self, gl: &glow::Context, name: &str, matrix: &Matrix4<f32>) {
        unsafe {
            let location = gl.get_uniform_location(self.handle, name);
            gl.uniform_matrix_4_f32_slice(location.as_ref(), false, matrix.as_slice());
        }
    }

    pub fn uniform_3_f32(&self, gl: &glow::Context, name: &str, vector: &Vector3<f32>) {
        unsafe {
            let location = gl.get_uniform_location(self.handle, name);
            gl.uniform_3_f32(location.as_ref(), vector.x, vector.y, vector.z);
        }
    }

    pub fn uniform_point_3_f32(&self, gl: &glow::Context, name: &str, point: &Point3<f32>) {
        self.uniform_3_f32(gl, name, &point.coords);
    }

    pub fn uniform_4_f32(&self, gl: &glow::Context, name: &str, x: f32, y: f32, z: f32, w: f32) {
        unsafe {
            let location = gl.get_uniform_location(self.handle, name);
            gl.uniform_4_f32(location.as_ref(), x, y, z, w);
        }
    }

    pub fn uniform_f32(&self, gl: &glow::Context, name: &str, value: f32) {
        unsafe {
            let location = gl.get_uniform_location(self.handle, name);
            gl.uniform_1_f32(location.as_ref(), value);
        }
    }
}
