use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6). PPM has no alpha channel, so it is dropped.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if buffer.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "cannot write an empty image",
            ));
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;

        for pixel in buffer.buffer().chunks_exact(CHANNELS) {
            file.write_all(&pixel[..3])?;
        }

        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
