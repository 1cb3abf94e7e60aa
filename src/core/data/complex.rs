use std::ops::{Add, Mul};

/// A point in the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Squared distance from the origin; avoids the square root the
    /// escape test does not need.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex { re: 3.0, im: -4.0 };

        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_zero() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let a = Complex { re: 1.0, im: 2.0 };
        let b = Complex { re: -3.0, im: 4.0 };
        let result = a + b;

        assert_eq!(result.re, -2.0);
        assert_eq!(result.im, 6.0);
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        let c = Complex { re: 2.0, im: 3.0 };
        let result = c * c;

        assert_eq!(result.re, -5.0);
        assert_eq!(result.im, 12.0);
    }

    #[test]
    fn test_mul_by_zero() {
        let c = Complex { re: 5.0, im: 3.0 };
        let result = c * Complex::ZERO;

        assert_eq!(result.re, 0.0);
        assert_eq!(result.im, 0.0);
    }
}
