use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootsTableError {
    InvalidSize { size: u32 },
    IndexOutOfRange { index: usize, size: usize },
}

impl fmt::Display for RootsTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "roots table size must be positive, got {}", size)
            }
            Self::IndexOutOfRange { index, size } => {
                write!(
                    f,
                    "root index {} out of range for table of size {}",
                    index, size
                )
            }
        }
    }
}

impl Error for RootsTableError {}
