use crate::core::actions::render_newton::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::newton::algorithm::PixelResult;
use crate::core::fractals::newton::colour_mapping::continuous_iteration::continuous_iteration;
use crate::core::fractals::newton::colour_mapping::hsv::unit_to_byte;

/// Cosine palette over the continuous iteration count. The root index is
/// not used.
#[must_use]
pub fn shade_neon(iterations: u32, distance_squared: f32) -> Colour {
    let ci = continuous_iteration(iterations, distance_squared);

    let r = (1.0 - (0.025 * ci).cos()) * 0.5;
    let g = (1.0 - (0.08 * ci).cos()) * 0.5;
    let b = (1.0 - (0.12 * ci).cos()) * 0.5;

    Colour {
        r: unit_to_byte(r),
        g: unit_to_byte(g),
        b: unit_to_byte(b),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeonColourMap;

impl ColourMap<PixelResult> for NeonColourMap {
    fn map(&self, result: &PixelResult) -> Colour {
        shade_neon(result.iterations, result.distance_squared)
    }
}
