mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::arguments::{Arguments, ArgumentsError};
pub use crate::controllers::cli::render_controller::{RenderController, RenderControllerError, run};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_newton::backend::{ParseRenderBackendError, RenderBackend};
pub use crate::core::actions::render_newton::ports::colour_map::ColourMap;
pub use crate::core::actions::render_newton::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_newton::render_newton::{
    render_newton, render_newton_parallel_rayon, render_newton_with_backend,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::newton::algorithm::{NewtonAlgorithm, NewtonExit, PixelResult};
pub use crate::core::fractals::newton::colour_mapping::kinds::{ColourMode, ParseColourModeError};
pub use crate::core::fractals::newton::colour_mapping::maps::classic::shade_classic;
pub use crate::core::fractals::newton::colour_mapping::maps::jewelry::shade_jewelry;
pub use crate::core::fractals::newton::colour_mapping::maps::neon::shade_neon;
pub use crate::core::fractals::newton::errors::RootsTableError;
pub use crate::core::fractals::newton::render_params::RenderParams;
pub use crate::core::fractals::newton::roots_table::RootsTable;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
