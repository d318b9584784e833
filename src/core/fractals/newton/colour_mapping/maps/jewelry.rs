use crate::core::actions::render_newton::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::newton::algorithm::PixelResult;
use crate::core::fractals::newton::colour_mapping::continuous_iteration::continuous_iteration;
use crate::core::fractals::newton::colour_mapping::hsv::{hsv_to_rgb_unit, unit_to_byte};

const HIGHLIGHT_HUE_OFFSET: f32 = 2.0 / 3.0;
const HIGHLIGHT_WEIGHT: f32 = 0.3;

/// Root hue blended with a complementary highlight, modulated by a cosine
/// of the continuous iteration count. Non-converged pixels are black.
#[must_use]
pub fn shade_jewelry(
    iterations: u32,
    max_iterations: u32,
    root_index: usize,
    root_count: usize,
    distance_squared: f32,
) -> Colour {
    if max_iterations == 0 || root_count == 0 || iterations == max_iterations {
        return Colour::BLACK;
    }

    let ci = continuous_iteration(iterations, distance_squared);
    let colour_value = 0.7 + 0.3 * (0.18 * ci).cos();

    let base_hue = root_index as f32 / root_count as f32;
    let base = hsv_to_rgb_unit(base_hue, 1.0, 1.0);
    let highlight = hsv_to_rgb_unit(base_hue + HIGHLIGHT_HUE_OFFSET, 1.0, 1.0);

    let [r, g, b] =
        [0, 1, 2].map(|i| (base[i] + HIGHLIGHT_WEIGHT * highlight[i]) * colour_value);

    Colour {
        r: unit_to_byte(r),
        g: unit_to_byte(g),
        b: unit_to_byte(b),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JewelryColourMap {
    max_iterations: u32,
    root_count: usize,
}

impl JewelryColourMap {
    #[must_use]
    pub fn new(max_iterations: u32, root_count: usize) -> Self {
        Self {
            max_iterations,
            root_count,
        }
    }
}

impl ColourMap<PixelResult> for JewelryColourMap {
    fn map(&self, result: &PixelResult) -> Colour {
        shade_jewelry(
            result.iterations,
            self.max_iterations,
            result.root_index,
            self.root_count,
            result.distance_squared,
        )
    }
}
