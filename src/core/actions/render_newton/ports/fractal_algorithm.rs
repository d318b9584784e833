use crate::core::data::point::Point;

/// Per-pixel computation. Implementations must be pure functions of the
/// pixel so that pixels can be evaluated in any order or in parallel.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
