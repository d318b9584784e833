use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished pixel buffer. Encoding is entirely the
/// implementation's concern.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
