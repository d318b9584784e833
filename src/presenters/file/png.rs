use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ColorType, ImageFormat};
use std::path::Path;

/// RGBA8 PNG via the `image` crate.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if buffer.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "cannot write an empty image",
            ));
        }

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            buffer.width(),
            buffer.height(),
            ColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(std::io::Error::other)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_decodable_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.png");
        let data: Vec<u8> = vec![
            255, 0, 0, 255, 0, 255, 0, 255, // row 0
            0, 0, 255, 255, 9, 8, 7, 255, // row 1
        ];
        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        PngFilePresenter::new().present(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.into_raw(), data);
    }

    #[test]
    fn test_refuses_empty_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let result = PngFilePresenter::new().present(&PixelBuffer::new(0, 5), &path);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("image.png");
        let buffer = PixelBuffer::new(1, 1);

        assert!(PngFilePresenter::new().present(&buffer, &path).is_err());
    }
}
