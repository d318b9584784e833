use log::debug;

use crate::core::actions::render_newton::backend::RenderBackend;
use crate::core::actions::render_newton::generate_pixels_parallel_rayon::generate_pixels_parallel_rayon;
use crate::core::actions::render_newton::generate_pixels_serial::generate_pixels_serial;
use crate::core::actions::render_newton::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::newton::algorithm::{NewtonAlgorithm, PixelResult};
use crate::core::fractals::newton::colour_mapping::kinds::ColourMode;
use crate::core::fractals::newton::colour_mapping::maps::classic::ClassicColourMap;
use crate::core::fractals::newton::colour_mapping::maps::jewelry::JewelryColourMap;
use crate::core::fractals::newton::colour_mapping::maps::neon::NeonColourMap;
use crate::core::fractals::newton::render_params::RenderParams;
use crate::core::fractals::newton::roots_table::RootsTable;

/// Renders the Newton fractal into `buffer` on the calling thread.
///
/// Every pixel's RGB is overwritten and its alpha set to 255. If either
/// dimension in `params` is zero, or the buffer's dimensions differ from
/// `params`, the buffer is left untouched.
pub fn render_newton(params: &RenderParams, roots: &RootsTable, buffer: &mut PixelBuffer) {
    render_newton_with_backend(params, roots, buffer, RenderBackend::Serial);
}

/// Same contract as [`render_newton`], with rows rendered in parallel.
pub fn render_newton_parallel_rayon(
    params: &RenderParams,
    roots: &RootsTable,
    buffer: &mut PixelBuffer,
) {
    render_newton_with_backend(params, roots, buffer, RenderBackend::Parallel);
}

pub fn render_newton_with_backend(
    params: &RenderParams,
    roots: &RootsTable,
    buffer: &mut PixelBuffer,
    backend: RenderBackend,
) {
    if params.width == 0
        || params.height == 0
        || buffer.width() != params.width
        || buffer.height() != params.height
    {
        debug!(
            "skipping render: params {}x{}, buffer {}x{}",
            params.width,
            params.height,
            buffer.width(),
            buffer.height()
        );
        return;
    }

    let algorithm = NewtonAlgorithm::new(params, roots);
    let root_count = roots.size();

    // Resolve the colour mode once so the pixel loop is monomorphised per map.
    match params.colour_mode {
        ColourMode::Classic => {
            let colour_map = ClassicColourMap::new(params.max_iterations, root_count);
            generate(buffer, &algorithm, &colour_map, backend);
        }
        ColourMode::Neon => {
            generate(buffer, &algorithm, &NeonColourMap, backend);
        }
        ColourMode::Jewelry => {
            let colour_map = JewelryColourMap::new(params.max_iterations, root_count);
            generate(buffer, &algorithm, &colour_map, backend);
        }
    }
}

fn generate<CMap>(
    buffer: &mut PixelBuffer,
    algorithm: &NewtonAlgorithm<'_>,
    colour_map: &CMap,
    backend: RenderBackend,
) where
    CMap: ColourMap<PixelResult> + Sync,
{
    match backend {
        RenderBackend::Serial => generate_pixels_serial(buffer, algorithm, colour_map),
        RenderBackend::Parallel => generate_pixels_parallel_rayon(buffer, algorithm, colour_map),
    }
}
