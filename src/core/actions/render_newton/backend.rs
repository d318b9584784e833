use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Strategy used to walk the pixel grid. Both produce the same pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderBackend {
    /// Single-threaded, row-major. The reference implementation.
    Serial,
    /// Rows distributed over rayon's global thread pool.
    #[default]
    Parallel,
}

impl RenderBackend {
    pub const ALL: &'static [Self] = &[Self::Parallel, Self::Serial];

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for RenderBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).cli_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRenderBackendError {
    input: String,
}

impl fmt::Display for ParseRenderBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown render backend '{}', expected one of: serial, parallel",
            self.input
        )
    }
}

impl Error for ParseRenderBackendError {}

impl FromStr for RenderBackend {
    type Err = ParseRenderBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|backend| backend.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRenderBackendError {
                input: s.to_owned(),
            })
    }
}
