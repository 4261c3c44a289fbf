use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("program resources not found, tried: {candidates:?}")]
    ResourceNotFound { candidates: Vec<PathBuf> },
    #[error("failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to compile {stage} shader {}: {log}", .path.display())]
    ShaderCompile {
        stage: &'static str,
        path: PathBuf,
        log: String,
    },
    #[error("failed to link shader program {program}: {log}")]
    ShaderLink { program: String, log: String },
    #[error("failed to load texture {}: {source}", .path.display())]
    TextureLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create OpenGL object: {0}")]
    GlObject(String),
    #[error("sphere needs at least 3 parallels and 3 meridians, got {parallels}x{meridians}")]
    InvalidTessellation { parallels: u32, meridians: u32 },
    #[error("invalid configuration file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create window: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, Error>;
