use crate::core::data::complex::Complex;
use crate::core::fractals::newton::errors::RootsTableError;
use std::f32::consts::TAU;

/// The n roots of unity, `e^(2πik/n)` for k in [0, n), stored as two
/// parallel arrays so renderers can scan them without reassembling
/// complex values.
#[derive(Debug, Clone, PartialEq)]
pub struct RootsTable {
    real: Vec<f32>,
    imag: Vec<f32>,
}

impl RootsTable {
    pub fn new(n: u32) -> Result<Self, RootsTableError> {
        if n == 0 {
            return Err(RootsTableError::InvalidSize { size: n });
        }

        let (real, imag) = (0..n)
            .map(|k| {
                let theta = TAU * k as f32 / n as f32;
                (theta.cos(), theta.sin())
            })
            .unzip();

        Ok(Self { real, imag })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.real.len()
    }

    pub fn root(&self, index: usize) -> Result<Complex, RootsTableError> {
        if index >= self.size() {
            return Err(RootsTableError::IndexOutOfRange {
                index,
                size: self.size(),
            });
        }

        Ok(Complex::new(self.real[index], self.imag[index]))
    }

    #[must_use]
    pub fn real(&self) -> &[f32] {
        &self.real
    }

    #[must_use]
    pub fn imag(&self) -> &[f32] {
        &self.imag
    }
}
