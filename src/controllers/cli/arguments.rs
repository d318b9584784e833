use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::core::actions::render_newton::backend::RenderBackend;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::newton::colour_mapping::kinds::ColourMode;
use crate::core::fractals::newton::render_params::RenderParams;

pub const MIN_TOLERANCE: f32 = 1e-9;
pub const MAX_TOLERANCE: f32 = 1e-2;

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentsError {
    InvalidXRange { xmin: f32, xmax: f32 },
    InvalidYRange { ymin: f32, ymax: f32 },
    ToleranceOutOfRange { tolerance: f32 },
    Viewport(ComplexRectError),
}

impl fmt::Display for ArgumentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidXRange { xmin, xmax } => {
                write!(f, "xmin must be < xmax (got {} and {})", xmin, xmax)
            }
            Self::InvalidYRange { ymin, ymax } => {
                write!(f, "ymin must be < ymax (got {} and {})", ymin, ymax)
            }
            Self::ToleranceOutOfRange { tolerance } => {
                write!(
                    f,
                    "tolerance {} outside [{}, {}]",
                    tolerance, MIN_TOLERANCE, MAX_TOLERANCE
                )
            }
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for ArgumentsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for ArgumentsError {
    fn from(err: ComplexRectError) -> Self {
        Self::Viewport(err)
    }
}

/// Command-line options for a single render.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "newton_fractal",
    version,
    about = "Newton fractal renderer for z^n - 1",
    args_override_self = true
)]
pub struct Arguments {
    /// Degree n in z^n - 1 = 0
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(2..=64))]
    pub degree: u32,

    /// Image width in pixels
    #[arg(long, default_value_t = 1920, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1080, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Minimum real value (left)
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub xmin: f32,

    /// Maximum real value (right)
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub xmax: f32,

    /// Minimum imaginary value (bottom)
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub ymin: f32,

    /// Maximum imaginary value (top)
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub ymax: f32,

    /// Maximum number of Newton iterations
    #[arg(long = "max-iter", default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    pub max_iterations: u32,

    /// Convergence tolerance on |f(z)|
    #[arg(long = "tol", default_value_t = 1e-6)]
    pub tolerance: f32,

    /// Output image path; a .ppm extension writes PPM, anything else PNG
    #[arg(short = 'o', long = "out", default_value = "nfract.png")]
    pub output: PathBuf,

    /// Shading policy: classic, neon or jewelry
    #[arg(short = 'c', long = "colour-mode", visible_alias = "color-mode", default_value_t = ColourMode::Classic, value_parser = clap::value_parser!(ColourMode))]
    pub colour_mode: ColourMode,

    /// Pixel loop strategy: parallel or serial
    #[arg(long, default_value_t = RenderBackend::Parallel, value_parser = clap::value_parser!(RenderBackend))]
    pub backend: RenderBackend,
}

impl Arguments {
    /// Checks the cross-field constraints clap cannot express and builds
    /// the parameters for the renderer.
    pub fn render_params(&self) -> Result<RenderParams, ArgumentsError> {
        if !(self.xmin < self.xmax) {
            return Err(ArgumentsError::InvalidXRange {
                xmin: self.xmin,
                xmax: self.xmax,
            });
        }

        if !(self.ymin < self.ymax) {
            return Err(ArgumentsError::InvalidYRange {
                ymin: self.ymin,
                ymax: self.ymax,
            });
        }

        if !(MIN_TOLERANCE..=MAX_TOLERANCE).contains(&self.tolerance) {
            return Err(ArgumentsError::ToleranceOutOfRange {
                tolerance: self.tolerance,
            });
        }

        let region = ComplexRect::new(
            Complex::new(self.xmin, self.ymin),
            Complex::new(self.xmax, self.ymax),
        )?;

        Ok(RenderParams {
            degree: self.degree,
            width: self.width,
            height: self.height,
            region,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            colour_mode: self.colour_mode,
        })
    }
}
