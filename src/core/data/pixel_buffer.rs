use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

/// Bytes per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// Writes an opaque RGBA pixel into a 4-byte slot.
#[inline]
pub(crate) fn write_rgba(slot: &mut [u8], colour: Colour) {
    slot[0] = colour.r;
    slot[1] = colour.g;
    slot[2] = colour.b;
    slot[3] = 255;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected buffer size {} does not match buffer size {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 image with a stride of `width * 4` bytes.
///
/// The buffer is owned by the caller; renderers borrow it mutably for the
/// duration of a render and never resize it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Allocates a zero-filled buffer. A zero width or height gives an
    /// empty buffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = dimensions_to_buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Mutable row slices, top to bottom, each `stride()` bytes long.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let stride = self.stride().max(1);
        self.buffer.chunks_exact_mut(stride)
    }

    /// Raw mutable bytes, for callers that partition rows themselves.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    pub fn fill(&mut self, value: u8) {
        self.buffer.fill(value);
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; CHANNELS]> {
        let index = self.index_of(pixel)?;
        let mut rgba = [0; CHANNELS];
        rgba.copy_from_slice(&self.buffer[index..index + CHANNELS]);
        Some(rgba)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            })?;

        write_rgba(&mut self.buffer[index..index + CHANNELS], colour);
        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        Some((pixel.y as usize * self.width as usize + pixel.x as usize) * CHANNELS)
    }
}
