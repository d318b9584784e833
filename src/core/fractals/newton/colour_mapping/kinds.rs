use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Shading policy applied to each pixel once its Newton iteration has been
/// classified against the roots table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMode {
    #[default]
    Classic,
    Neon,
    Jewelry,
}

impl ColourMode {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Neon, Self::Jewelry];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Neon => "Neon",
            Self::Jewelry => "Jewelry",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Neon => "neon",
            Self::Jewelry => "jewelry",
        }
    }
}

impl fmt::Display for ColourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColourModeError {
    input: String,
}

impl fmt::Display for ParseColourModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown colour mode '{}', expected one of: classic, neon, jewelry",
            self.input
        )
    }
}

impl Error for ParseColourModeError {}

impl FromStr for ColourMode {
    type Err = ParseColourModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColourModeError {
                input: s.to_owned(),
            })
    }
}
