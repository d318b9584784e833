use crate::core::actions::render_newton::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::newton::algorithm::PixelResult;
use crate::core::fractals::newton::colour_mapping::hsv::hsv_to_rgb;

/// Hue from the root index, brightness fading with the iteration count.
#[must_use]
pub fn shade_classic(
    iterations: u32,
    max_iterations: u32,
    root_index: usize,
    root_count: usize,
) -> Colour {
    let hue = if root_count > 0 {
        root_index as f32 / root_count as f32
    } else {
        0.0
    };

    let t = if max_iterations > 1 {
        1.0 - iterations as f32 / max_iterations as f32
    } else {
        1.0
    };

    hsv_to_rgb(hue, 1.0, t.clamp(0.0, 1.0))
}

#[derive(Debug, Clone, Copy)]
pub struct ClassicColourMap {
    max_iterations: u32,
    root_count: usize,
}

impl ClassicColourMap {
    #[must_use]
    pub fn new(max_iterations: u32, root_count: usize) -> Self {
        Self {
            max_iterations,
            root_count,
        }
    }
}

impl ColourMap<PixelResult> for ClassicColourMap {
    fn map(&self, result: &PixelResult) -> Colour {
        shade_classic(
            result.iterations,
            self.max_iterations,
            result.root_index,
            self.root_count,
        )
    }
}
