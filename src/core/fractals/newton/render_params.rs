use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::newton::colour_mapping::kinds::ColourMode;

/// Everything a single Newton render needs besides the roots table and the
/// output buffer. Validation (degree and iteration ranges, viewport order)
/// belongs to whoever builds it; the renderers only guard against
/// dimensions that would leave them nothing to write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub degree: u32,
    pub width: u32,
    pub height: u32,
    pub region: ComplexRect,
    pub max_iterations: u32,
    pub tolerance: f32,
    pub colour_mode: ColourMode,
}

impl RenderParams {
    /// Complex-plane distance between neighbouring pixel centres. The
    /// edges of the viewport land exactly on the first and last pixels.
    #[must_use]
    pub fn pixel_step(&self) -> Complex {
        Complex {
            real: self.region.width() / self.width.saturating_sub(1).max(1) as f32,
            imag: self.region.height() / self.height.saturating_sub(1).max(1) as f32,
        }
    }
}
