use crate::core::actions::render_newton::ports::colour_map::ColourMap;
use crate::core::actions::render_newton::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer, write_rgba};
use crate::core::data::point::Point;

/// Computes and colours every pixel of one row, writing opaque RGBA.
#[inline]
pub(crate) fn generate_row<Alg, CMap>(row: &mut [u8], y: u32, algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (x, slot) in row.chunks_exact_mut(CHANNELS).enumerate() {
        let value = algorithm.compute(Point { x: x as u32, y });
        write_rgba(slot, colour_map.map(&value));
    }
}

/// Fills the whole buffer in row-major order on the calling thread.
pub fn generate_pixels_serial<Alg, CMap>(buffer: &mut PixelBuffer, algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    for (y, row) in buffer.rows_mut().enumerate() {
        generate_row(row, y as u32, algorithm, colour_map);
    }
}
