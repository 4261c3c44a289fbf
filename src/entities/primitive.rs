use crate::{
    config::Tessellation,
    error::Result,
    render::{
        gl_program::GlProgram,
        registry::{PrimitiveKind, SharedResourceRegistry},
        shared::SharedRenderResource,
    },
    resources::ResourceDir,
};

/// A drawable type whose GPU program and buffers are shared by all of its instances.
pub trait Primitive {
    const KIND: PrimitiveKind;
    /// Stem of the shader pair in the resource directory.
    const PROGRAM: &'static str;

    fn prepare(
        gl: &glow::Context,
        resources: &ResourceDir,
        tessellation: &Tessellation,
    ) -> Result<SharedRenderResource>;
}

pub fn load_program(gl: &glow::Context, resources: &ResourceDir, stem: &str) -> Result<GlProgram> {
    let (vertex, fragment) = resources.shader_pair(stem);

    GlProgram::with_shader_paths(
        gl,
        vec![
            (vertex.as_path(), glow::VERTEX_SHADER),
            (fragment.as_path(), glow::FRAGMENT_SHADER),
        ],
    )
}

impl SharedResourceRegistry<SharedRenderResource> {
    /// Prepares the shared resource of `P` on first use, afterwards only looks it up.
    pub fn ensure_prepared<P: Primitive>(
        &mut self,
        gl: &glow::Context,
        resources: &ResourceDir,
        tessellation: &Tessellation,
    ) -> Result<&SharedRenderResource> {
        self.get_or_try_insert_with(P::KIND, || {
            let resource = P::prepare(gl, resources, tessellation)?;
            log::info!("Prepared shared {:?} resource", P::KIND);
            Ok(resource)
        })
    }
}
