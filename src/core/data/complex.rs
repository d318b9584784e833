use std::ops::{Add, Div, Mul, Sub};

// Single precision throughout so results stay comparable across backends.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f32 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            real: factor * self.real,
            imag: factor * self.imag,
        }
    }

    /// Raises `self` to a non-negative integer power by repeated
    /// multiplication, starting from one.
    #[must_use]
    pub fn powu(self, exponent: u32) -> Self {
        (0..exponent).fold(Self::ONE, |acc, _| acc * self)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Div for Complex {
    type Output = Self;

    // (a+ib)/(c+id) = ((ac+bd) + i(bc-ad)) / (c²+d²)
    fn div(self, other: Self) -> Self {
        let (a, b) = (self.real, self.imag);
        let (c, d) = (other.real, other.imag);
        let inv_denominator = 1.0 / other.magnitude_squared();

        Self {
            real: (a * c + b * d) * inv_denominator,
            imag: (b * c - a * d) * inv_denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_negative_parts() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_sub() {
        let result = Complex::new(1.0, 2.0) - Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-2.0, -2.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_div() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let result = Complex::new(-5.0, 10.0) / Complex::new(3.0, 4.0);
        assert!((result.real - 1.0).abs() < 1e-6);
        assert!((result.imag - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_div_by_i() {
        // 1 / i = -i
        let result = Complex::ONE / Complex::new(0.0, 1.0);
        assert_eq!(result, Complex::new(0.0, -1.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Complex::new(1.5, -2.0).scale(2.0), Complex::new(3.0, -4.0));
    }

    #[test]
    fn test_powu_zero_is_one() {
        assert_eq!(Complex::new(5.0, 3.0).powu(0), Complex::ONE);
    }

    #[test]
    fn test_powu_matches_repeated_mul() {
        // (2 + 3i)³ = -46 + 9i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c.powu(3), Complex::new(-46.0, 9.0));
        assert_eq!(c.powu(2), c * c);
    }

    #[test]
    fn test_i_to_the_fourth_is_one() {
        assert_eq!(Complex::new(0.0, 1.0).powu(4), Complex::ONE);
    }
}
