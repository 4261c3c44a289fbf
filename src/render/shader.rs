use crate::error::{Error, Result};
use glow::{self, HasContext};
use std::path::Path;

pub struct Shader {
    kind: u32,
    handle: u32,
}

impl Shader {
    pub fn from_file(gl: &glow::Context, shader_path: &Path, kind: u32) -> Result<Shader> {
        let shader_source =
            std::fs::read_to_string(shader_path).map_err(|source| Error::FileRead {
                path: shader_path.to_path_buf(),
                source,
            })?;

        unsafe {
            let handle = gl.create_shader(kind).map_err(Error::GlObject)?;
            gl.shader_source(handle, &shader_source);
            gl.compile_shader(handle);

            if !gl.get_shader_compile_status(handle) {
                let log = gl.get_shader_info_log(handle);
                gl.delete_shader(handle);

                return Err(Error::ShaderCompile {
                    stage: stage_name(kind),
                    path: shader_path.to_path_buf(),
                    log,
                });
            }

            Ok(Shader { kind, handle })
        }
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn kind(&self) -> u32 {
        self.kind
    }

    pub fn delete(self, gl: &glow::Context) {
        unsafe { gl.delete_shader(self.handle) };
    }
}

fn stage_name(kind: u32) -> &'static str {
    match kind {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}
