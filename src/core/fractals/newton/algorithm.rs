use crate::core::actions::render_newton::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::newton::render_params::RenderParams;
use crate::core::fractals::newton::roots_table::RootsTable;

const DERIVATIVE_EPSILON_SQUARED: f32 = 1e-12;

/// How the bounded Newton loop for one pixel ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonExit {
    /// |f(z)|² fell below the squared tolerance.
    Converged,
    /// |f'(z)|² vanished; the loop stops without a further step.
    DerivativeVanished,
    /// The iteration cap was reached.
    Exhausted,
}

/// Outcome of one pixel's iteration, consumed by a colour map and then
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelResult {
    pub z: Complex,
    pub iterations: u32,
    pub exit: NewtonExit,
    pub root_index: usize,
    pub distance_squared: f32,
}

/// Newton's method on f(z) = z^n - 1, evaluated per pixel.
///
/// Holds only shared, read-only state, so one instance can be used from
/// any number of threads at once.
#[derive(Debug)]
pub struct NewtonAlgorithm<'a> {
    origin: Complex,
    step: Complex,
    degree: u32,
    max_iterations: u32,
    tolerance_squared: f32,
    roots: &'a RootsTable,
}

impl<'a> NewtonAlgorithm<'a> {
    #[must_use]
    pub fn new(params: &RenderParams, roots: &'a RootsTable) -> Self {
        Self {
            origin: params.region.min(),
            step: params.pixel_step(),
            degree: params.degree,
            max_iterations: params.max_iterations,
            tolerance_squared: params.tolerance * params.tolerance,
            roots,
        }
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: self.origin.real + pixel.x as f32 * self.step.real,
            imag: self.origin.imag + pixel.y as f32 * self.step.imag,
        }
    }

    /// Runs at most `max_iterations` Newton steps from `start`, returning
    /// the final point, the number of completed steps and the exit state.
    #[must_use]
    pub fn iterate(&self, start: Complex) -> (Complex, u32, NewtonExit) {
        let degree = self.degree as f32;
        let mut z = start;

        for iteration in 0..self.max_iterations {
            // z^(n-1), reused for f and f'
            let z_pow = z.powu(self.degree.saturating_sub(1));
            let f = z_pow * z - Complex::ONE;

            if f.magnitude_squared() < self.tolerance_squared {
                return (z, iteration, NewtonExit::Converged);
            }

            let slope = z_pow.scale(degree);

            if slope.magnitude_squared() < DERIVATIVE_EPSILON_SQUARED {
                return (z, iteration, NewtonExit::DerivativeVanished);
            }

            z = z - f / slope;
        }

        (z, self.max_iterations, NewtonExit::Exhausted)
    }

    /// Index of and squared distance to the nearest root. Exact ties go to
    /// the lowest index.
    #[must_use]
    pub fn classify(&self, z: Complex) -> (usize, f32) {
        let mut best_index = 0;
        let mut best_distance_squared = f32::MAX;

        for (k, (&re, &im)) in self
            .roots
            .real()
            .iter()
            .zip(self.roots.imag())
            .enumerate()
        {
            let dx = z.real - re;
            let dy = z.imag - im;
            let distance_squared = dx * dx + dy * dy;

            if distance_squared < best_distance_squared {
                best_distance_squared = distance_squared;
                best_index = k;
            }
        }

        (best_index, best_distance_squared)
    }

    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.size()
    }
}

impl FractalAlgorithm for NewtonAlgorithm<'_> {
    type Success = PixelResult;

    fn compute(&self, pixel: Point) -> PixelResult {
        let (z, iterations, exit) = self.iterate(self.pixel_to_complex(pixel));
        let (root_index, distance_squared) = self.classify(z);

        PixelResult {
            z,
            iterations,
            exit,
            root_index,
            distance_squared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::fractals::newton::colour_mapping::kinds::ColourMode;

    // 3x3 pixels over [-1, 1]²: pixel (x, y) maps to (x - 1, y - 1).
    fn unit_params(degree: u32, max_iterations: u32) -> RenderParams {
        RenderParams {
            degree,
            width: 3,
            height: 3,
            region: ComplexRect::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0)).unwrap(),
            max_iterations,
            tolerance: 1e-4,
            colour_mode: ColourMode::Classic,
        }
    }

    #[test]
    fn test_pixel_to_complex_matches_viewport_corners() {
        let params = RenderParams {
            width: 8,
            height: 6,
            region: ComplexRect::new(Complex::new(-1.5, -1.0), Complex::new(1.5, 1.0)).unwrap(),
            ..unit_params(3, 20)
        };
        let roots = RootsTable::new(3).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        let first = algorithm.pixel_to_complex(Point { x: 0, y: 0 });
        let last = algorithm.pixel_to_complex(Point { x: 7, y: 5 });

        assert_eq!(first, Complex::new(-1.5, -1.0));
        assert!((last.real - 1.5).abs() < 1e-6);
        assert!((last.imag - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_start_on_root_converges_immediately() {
        let params = unit_params(3, 20);
        let roots = RootsTable::new(3).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        let result = algorithm.compute(Point { x: 2, y: 1 });

        assert_eq!(result.exit, NewtonExit::Converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root_index, 0);
        assert_eq!(result.distance_squared, 0.0);
    }

    #[test]
    fn test_origin_has_vanishing_derivative() {
        let params = unit_params(3, 20);
        let roots = RootsTable::new(3).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        let result = algorithm.compute(Point { x: 1, y: 1 });

        assert_eq!(result.exit, NewtonExit::DerivativeVanished);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.z, Complex::ZERO);
    }

    #[test]
    fn test_iteration_cap_reports_exhausted() {
        let params = unit_params(3, 1);
        let roots = RootsTable::new(3).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        let result = algorithm.compute(Point { x: 0, y: 0 });

        assert_eq!(result.exit, NewtonExit::Exhausted);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_converges_to_nearest_root_of_unity() {
        let params = unit_params(4, 50);
        let roots = RootsTable::new(4).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        let (z, iterations, exit) = algorithm.iterate(Complex::new(0.1, 0.9));
        let (root_index, distance_squared) = algorithm.classify(z);

        assert_eq!(exit, NewtonExit::Converged);
        assert!(iterations > 0 && iterations < 50);
        assert_eq!(root_index, 1);
        assert!(distance_squared < 1e-6);
    }

    #[test]
    fn test_every_degree_converges_from_near_each_root() {
        for degree in 2..=12 {
            let params = unit_params(degree, 50);
            let roots = RootsTable::new(degree).unwrap();
            let algorithm = NewtonAlgorithm::new(&params, &roots);

            for k in 0..roots.size() {
                let start = roots.root(k).unwrap().scale(1.05);
                let (z, _, exit) = algorithm.iterate(start);

                assert_eq!(exit, NewtonExit::Converged, "degree {} root {}", degree, k);
                assert_eq!(algorithm.classify(z).0, k, "degree {} root {}", degree, k);
            }
        }
    }

    #[test]
    fn test_classify_prefers_lowest_index_on_ties() {
        let params = unit_params(2, 20);
        let roots = RootsTable::new(2).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        // Roots are 1 and -1; the origin is equidistant from both.
        let (index, distance_squared) = algorithm.classify(Complex::ZERO);

        assert_eq!(index, 0);
        assert_eq!(distance_squared, 1.0);
        assert_eq!(algorithm.classify(Complex::new(-1.0, 0.0)).0, 1);
    }

    #[test]
    fn test_nan_start_classifies_to_first_root() {
        let params = unit_params(3, 5);
        let roots = RootsTable::new(3).unwrap();
        let algorithm = NewtonAlgorithm::new(&params, &roots);

        let (index, distance_squared) = algorithm.classify(Complex::new(f32::NAN, 0.0));

        assert_eq!(index, 0);
        assert_eq!(distance_squared, f32::MAX);
    }

    #[test]
    fn test_root_count_matches_table() {
        let params = unit_params(5, 5);
        let roots = RootsTable::new(5).unwrap();

        assert_eq!(NewtonAlgorithm::new(&params, &roots).root_count(), 5);
    }
}
