use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::cli::arguments::{Arguments, ArgumentsError};
use crate::controllers::cli::output_format::OutputFormat;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_newton::backend::RenderBackend;
use crate::core::actions::render_newton::render_newton::render_newton_with_backend;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::newton::errors::RootsTableError;
use crate::core::fractals::newton::render_params::RenderParams;
use crate::core::fractals::newton::roots_table::RootsTable;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

#[derive(Debug)]
pub enum RenderControllerError {
    Arguments(ArgumentsError),
    RootsTable(RootsTableError),
    Present(std::io::Error),
}

impl fmt::Display for RenderControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arguments(err) => write!(f, "invalid arguments: {}", err),
            Self::RootsTable(err) => write!(f, "roots table error: {}", err),
            Self::Present(err) => write!(f, "Failed to write image: {}", err),
        }
    }
}

impl Error for RenderControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arguments(err) => Some(err),
            Self::RootsTable(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<ArgumentsError> for RenderControllerError {
    fn from(err: ArgumentsError) -> Self {
        Self::Arguments(err)
    }
}

impl From<RootsTableError> for RenderControllerError {
    fn from(err: RootsTableError) -> Self {
        Self::RootsTable(err)
    }
}

/// Drives one render: roots table, buffer, pixels, then hands the buffer
/// to the presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        params: &RenderParams,
        backend: RenderBackend,
    ) -> Result<(), RenderControllerError> {
        info!("Rendering Newton fractal...");
        info!("Image size: {}x{}", params.width, params.height);
        info!("Degree: {}", params.degree);
        info!("Max iterations: {}", params.max_iterations);
        info!("Colour mode: {}", params.colour_mode);
        info!("Backend: {}", backend);

        let roots = RootsTable::new(params.degree)?;
        let mut buffer = PixelBuffer::new(params.width, params.height);

        let start = Instant::now();
        render_newton_with_backend(params, &roots, &mut buffer, backend);
        info!("Duration: {:?}", start.elapsed());

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("Saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

fn run_with<P: FilePresenterPort>(
    presenter: P,
    params: &RenderParams,
    arguments: &Arguments,
) -> Result<(), RenderControllerError> {
    let mut controller = RenderController::new(presenter);
    controller.generate(params, arguments.backend)?;
    controller
        .write(&arguments.output)
        .map_err(RenderControllerError::Present)
}

/// Validates the arguments, renders, and writes the image in the format
/// implied by the output path.
pub fn run(arguments: &Arguments) -> Result<(), RenderControllerError> {
    let params = arguments.render_params()?;

    match OutputFormat::from_path(&arguments.output) {
        OutputFormat::Png => run_with(PngFilePresenter::new(), &params, arguments),
        OutputFormat::Ppm => run_with(PpmFilePresenter::new(), &params, arguments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(u32, u32, PathBuf)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.borrow_mut().push((
                buffer.width(),
                buffer.height(),
                filepath.as_ref().to_path_buf(),
            ));
            Ok(())
        }
    }

    fn arguments(output: &Path, extra: &[&str]) -> Arguments {
        let output = output.to_str().unwrap().to_owned();
        let mut args = vec![
            "newton_fractal".to_owned(),
            "--degree".to_owned(),
            "3".to_owned(),
            "--width".to_owned(),
            "32".to_owned(),
            "--height".to_owned(),
            "24".to_owned(),
            "--max-iter".to_owned(),
            "50".to_owned(),
            "--xmin".to_owned(),
            "-1.0".to_owned(),
            "--xmax".to_owned(),
            "1.0".to_owned(),
            "--ymin".to_owned(),
            "-1.0".to_owned(),
            "--ymax".to_owned(),
            "1.0".to_owned(),
            "--tol".to_owned(),
            "1e-4".to_owned(),
            "--out".to_owned(),
            output,
        ];
        args.extend(extra.iter().map(|s| (*s).to_owned()));
        Arguments::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_generate_then_write_presents_buffer() {
        let presenter = RecordingPresenter::default();
        let args = arguments(Path::new("ignored.png"), &[]);
        let params = args.render_params().unwrap();
        let mut controller = RenderController::new(&presenter);

        controller.generate(&params, RenderBackend::Serial).unwrap();
        controller.write("frame.png").unwrap();

        assert_eq!(
            *presenter.presented.borrow(),
            vec![(32, 24, PathBuf::from("frame.png"))]
        );
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = RenderController::new(&presenter);

        controller.write("frame.png").unwrap();

        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generated_buffer_is_opaque() {
        let presenter = RecordingPresenter::default();
        let args = arguments(Path::new("ignored.png"), &["--colour-mode", "neon"]);
        let params = args.render_params().unwrap();
        let mut controller = RenderController::new(&presenter);

        controller.generate(&params, RenderBackend::Parallel).unwrap();

        let buffer = controller.buffer().unwrap();
        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_run_writes_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fractal.png");

        run(&arguments(&path, &[])).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_run_writes_ppm_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fractal.ppm");

        run(&arguments(&path, &["--colour-mode", "jewelry"])).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n32 24\n255\n"));
        assert_eq!(bytes.len(), "P6\n32 24\n255\n".len() + 32 * 24 * 3);
    }

    #[test]
    fn test_run_rejects_invalid_viewport() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.png");
        let args = arguments(&path, &["--xmin", "1.0", "--xmax", "0.0"]);

        let result = run(&args);

        assert!(matches!(result, Err(RenderControllerError::Arguments(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_run_fails_when_output_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subdir-does-not-exist").join("image.png");

        let result = run(&arguments(&path, &[]));

        assert!(matches!(result, Err(RenderControllerError::Present(_))));
        assert!(!path.exists());
    }
}
