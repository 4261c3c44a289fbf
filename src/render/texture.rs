use crate::error::{Error, Result};
use image::DynamicImage;
use std::path::Path;

/// Decoded image ready to be uploaded as an RGB texture. Rows are flipped so that the first row
/// is the bottom of the picture, as OpenGL expects.
#[derive(Debug)]
pub struct Texture {
    pub image: DynamicImage,
}

impl Texture {
    pub fn from_file(path: &Path) -> Result<Self> {
        let image = image::io::Reader::open(path)
            .map_err(|source| Error::TextureLoad {
                path: path.to_path_buf(),
                source: source.into(),
            })?
            .with_guessed_format()
            .map_err(|source| Error::TextureLoad {
                path: path.to_path_buf(),
                source: source.into(),
            })?
            .decode()
            .map_err(|source| Error::TextureLoad {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: DynamicImage::ImageRgb8(image.flipv().into_rgb8()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn images_are_flipped_and_converted_to_rgb() {
        let mut source = RgbaImage::new(1, 2);
        source.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        source.put_pixel(0, 1, Rgba([0, 0, 255, 255]));

        let texture = Texture::from_image(DynamicImage::ImageRgba8(source));
        let rgb = texture.image.as_rgb8().unwrap();

        assert_eq!(*rgb.get_pixel(0, 0), Rgb([0, 0, 255]));
        assert_eq!(*rgb.get_pixel(0, 1), Rgb([255, 0, 0]));
    }

    #[test]
    fn missing_file_is_a_texture_error() {
        let result = Texture::from_file(Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(Error::TextureLoad { .. })));
    }
}
