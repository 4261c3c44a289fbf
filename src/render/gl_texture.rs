use crate::{
    error::{Error, Result},
    render::texture::Texture,
};
use glow::HasContext;

fn texture_format(texture: &Texture) -> Option<u32> {
    match texture.image {
        image::DynamicImage::ImageRgb8(_) => Some(glow::RGB),
        image::DynamicImage::ImageRgba8(_) => Some(glow::RGBA),
        _ => None,
    }
}

/// Handle of a 2D texture living for the rest of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlTexture {
    handle: u32,
}

impl GlTexture {
    pub fn new(gl: &glow::Context, texture: &Texture) -> Result<Self> {
        let format = texture_format(texture).ok_or_else(|| {
            Error::GlObject(String::from("2D texture image is neither RGB nor RGBA"))
        })?;
        let handle = Self::create_and_bind(gl)?;

        unsafe {
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                texture.width() as i32,
                texture.height() as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                Some(texture.image.as_bytes()),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
        }

        Ok(Self { handle })
    }

    /// Wraps an existing handle, e.g. one created by another context user.
    pub fn from_handle(handle: u32) -> Self {
        Self { handle }
    }

    fn create_and_bind(gl: &glow::Context) -> Result<u32> {
        unsafe {
            let texture = gl.create_texture().map_err(Error::GlObject)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            Ok(texture)
        }
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_texture(glow::TEXTURE_2D, Some(self.handle)) }
    }
}

/// Handle of a cube map living for the rest of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlCubeTexture {
    handle: u32,
}

impl GlCubeTexture {
    /// Faces are uploaded in order to `TEXTURE_CUBE_MAP_POSITIVE_X + i`.
    pub fn new(gl: &glow::Context, faces: &[Texture; 6]) -> Result<Self> {
        let format = texture_format(&faces[0])
            .ok_or_else(|| Error::GlObject(String::from("cube face is neither RGB nor RGBA")))?;

        if faces.iter().any(|face| texture_format(face) != Some(format)) {
            return Err(Error::GlObject(String::from(
                "cube faces do not share a pixel format",
            )));
        }

        let handle = Self::create_and_bind(gl)?;

        unsafe {
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            for (idx, face) in faces.iter().enumerate() {
                gl.tex_image_2d(
                    glow::TEXTURE_CUBE_MAP_POSITIVE_X + idx as u32,
                    0,
                    format as i32,
                    face.width() as i32,
                    face.height() as i32,
                    0,
                    format,
                    glow::UNSIGNED_BYTE,
                    Some(face.image.as_bytes()),
                );
            }
        }

        Ok(Self { handle })
    }

    pub fn from_handle(handle: u32) -> Self {
        Self { handle }
    }

    fn create_and_bind(gl: &glow::Context) -> Result<u32> {
        unsafe {
            let texture = gl.create_texture().map_err(Error::GlObject)?;
            gl.bind_texture(glow::TEXTURE_CUBE_MAP, Some(texture));

            gl.tex_parameter_i32(
                glow::TEXTURE_CUBE_MAP,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_CUBE_MAP,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_CUBE_MAP,
                glow::TEXTURE_WRAP_R,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_CUBE_MAP,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_CUBE_MAP,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            Ok(texture)
        }
    }

    pub fn handle(&self) -> u32 {
        self.handle
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_texture(glow::TEXTURE_CUBE_MAP, Some(self.handle)) }
    }
}
