use rayon::prelude::*;

use crate::core::actions::render_newton::generate_pixels_serial::generate_row;
use crate::core::actions::render_newton::ports::colour_map::ColourMap;
use crate::core::actions::render_newton::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Fills the buffer using rayon's work-stealing scheduler, one task per row.
///
/// Rows are disjoint slices of the buffer, so no locking is needed and the
/// output is identical to [`generate_pixels_serial`] for a pure algorithm.
///
/// [`generate_pixels_serial`]: crate::core::actions::render_newton::generate_pixels_serial::generate_pixels_serial
pub fn generate_pixels_parallel_rayon<Alg, CMap>(
    buffer: &mut PixelBuffer,
    algorithm: &Alg,
    colour_map: &CMap,
) where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let stride = buffer.stride();
    if stride == 0 {
        return;
    }

    buffer
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| generate_row(row, y as u32, algorithm, colour_map));
}
