const SMOOTHING_DISTANCE: f32 = 1.0e-4;
const FLOOR: f32 = 1.0e-12;

/// Fractional iteration estimate from the final squared distance to the
/// nearest root. Removes the banding a raw iteration count produces.
#[must_use]
pub fn continuous_iteration(iterations: u32, distance_squared: f32) -> f32 {
    let distance = distance_squared.sqrt().max(FLOOR);
    let ratio = (distance.ln() / SMOOTHING_DISTANCE.ln()).max(FLOOR);

    iterations as f32 - ratio.ln() / 2.0_f32.ln()
}
