use crate::{
    error::{Error, Result},
    render::{
        gl_texture::{GlCubeTexture, GlTexture},
        texture::Texture,
    },
};
use std::path::{Path, PathBuf};

/// File whose presence marks a directory as the resource directory.
pub const PROBE_FILE: &str = "sphere.vs";
pub const VERTEX_SHADER_EXTENSION: &str = "vs";
pub const FRAGMENT_SHADER_EXTENSION: &str = "fs";

pub const PRIMARY_TEXTURE: &str = "earth2048.bmp";
pub const SATELLITE_TEXTURE: &str = "moon1024.bmp";

/// Cube map faces in `TEXTURE_CUBE_MAP_POSITIVE_X + i` order. Bottom and top are swapped with
/// respect to the +Y, -Y convention; the backdrop images are authored for this order.
pub const SKYBOX_FACES: [&str; 6] = [
    "bkg1_right.png",
    "bkg1_left.png",
    "bkg1_bot.png",
    "bkg1_top.png",
    "bkg1_front.png",
    "bkg1_back.png",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDir {
    root: PathBuf,
}

impl ResourceDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// First candidate directory containing [`PROBE_FILE`].
    pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .find(|candidate| candidate.join(PROBE_FILE).is_file())
            .map(|root| {
                log::info!("Using resources from {}", root.display());
                Self::new(root)
            })
            .ok_or_else(|| Error::ResourceNotFound {
                candidates: candidates.iter().map(|c| c.as_ref().to_path_buf()).collect(),
            })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Vertex and fragment shader paths of the program called `stem`.
    pub fn shader_pair(&self, stem: &str) -> (PathBuf, PathBuf) {
        let mut vertex = self.path(stem);
        vertex.set_extension(VERTEX_SHADER_EXTENSION);
        let mut fragment = self.path(stem);
        fragment.set_extension(FRAGMENT_SHADER_EXTENSION);

        (vertex, fragment)
    }

    pub fn skybox_faces(&self) -> [PathBuf; 6] {
        SKYBOX_FACES.map(|face| self.path(face))
    }
}

/// Textures of the scene, uploaded once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneTextures {
    pub primary: GlTexture,
    pub satellite: GlTexture,
    pub sky: GlCubeTexture,
}

impl SceneTextures {
    pub fn load(gl: &glow::Context, resources: &ResourceDir) -> Result<Self> {
        let primary = load_texture(gl, &resources.path(PRIMARY_TEXTURE))?;
        let satellite = load_texture(gl, &resources.path(SATELLITE_TEXTURE))?;
        let sky = load_cube_texture(gl, &resources.skybox_faces())?;

        Ok(Self {
            primary,
            satellite,
            sky,
        })
    }
}

fn load_texture(gl: &glow::Context, path: &Path) -> Result<GlTexture> {
    let texture = Texture::from_file(path)?;
    log::info!(
        "Loaded texture {} ({}x{})",
        path.display(),
        texture.width(),
        texture.height()
    );

    GlTexture::new(gl, &texture)
}

fn load_cube_texture(gl: &glow::Context, paths: &[PathBuf; 6]) -> Result<GlCubeTexture> {
    let faces: [Texture; 6] = paths
        .iter()
        .map(|path| Texture::from_file(path))
        .collect::<Result<Vec<_>>>()?
        .try_into()
        .map_err(|_| Error::GlObject(String::from("cube map needs exactly six faces")))?;

    log::info!("Loaded cube map from {}", paths[0].display());

    GlCubeTexture::new(gl, &faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_picks_first_directory_with_probe_file() {
        let empty = tempfile::tempdir().unwrap();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join(PROBE_FILE), "").unwrap();
        std::fs::write(second.path().join(PROBE_FILE), "").unwrap();

        let located =
            ResourceDir::locate(&[empty.path(), first.path(), second.path()]).unwrap();

        assert_eq!(located.root(), first.path());
    }

    #[test]
    fn locate_reports_every_candidate_on_failure() {
        let empty = tempfile::tempdir().unwrap();
        let missing = empty.path().join("missing");

        let error = ResourceDir::locate(&[empty.path(), missing.as_path()]).unwrap_err();

        match error {
            Error::ResourceNotFound { candidates } => {
                assert_eq!(candidates, vec![empty.path().to_path_buf(), missing])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shader_pair_uses_vs_and_fs_extensions() {
        let resources = ResourceDir::new("assets");
        let (vertex, fragment) = resources.shader_pair("sphere");

        assert_eq!(vertex, Path::new("assets/sphere.vs"));
        assert_eq!(fragment, Path::new("assets/sphere.fs"));
    }

    #[test]
    fn skybox_faces_keep_swapped_vertical_order() {
        let faces = ResourceDir::new("assets").skybox_faces();

        assert_eq!(faces[2], Path::new("assets/bkg1_bot.png"));
        assert_eq!(faces[3], Path::new("assets/bkg1_top.png"));
    }
}
