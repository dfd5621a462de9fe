use crate::core::data::complex::Complex;
use std::ops::{Add, Mul, Neg, Sub};

/// A polynomial in one complex variable, stored as coefficients by
/// ascending power. The coefficient sequence is never empty: the zero
/// polynomial is degree 0 with a single zero coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    /// Trailing zero high-order coefficients are trimmed, so the leading
    /// coefficient is nonzero for every polynomial other than zero.
    #[must_use]
    pub fn new(mut coefficients: Vec<Complex>) -> Self {
        while coefficients.len() > 1 && coefficients.last() == Some(&Complex::ZERO) {
            coefficients.pop();
        }

        if coefficients.is_empty() {
            coefficients.push(Complex::ZERO);
        }

        Self { coefficients }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::constant(Complex::ZERO)
    }

    #[must_use]
    pub fn constant(value: Complex) -> Self {
        Self {
            coefficients: vec![value],
        }
    }

    /// The free variable `z` as a polynomial.
    #[must_use]
    pub fn variable() -> Self {
        Self {
            coefficients: vec![Complex::ZERO, Complex::ONE],
        }
    }

    #[must_use]
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[must_use]
    pub fn leading_coefficient(&self) -> Complex {
        self.coefficients[self.coefficients.len() - 1]
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == Complex::ZERO)
    }

    /// Horner's rule.
    #[must_use]
    pub fn evaluate(&self, z: Complex) -> Complex {
        self.coefficients
            .iter()
            .rev()
            .fold(Complex::ZERO, |accumulator, coefficient| {
                accumulator * z + *coefficient
            })
    }

    /// Term-wise derivative. The derivative of a degree-0 polynomial is
    /// the degree-0 zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let derived = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, coefficient)| *coefficient * Complex::new(power as f64, 0.0))
            .collect();

        Self::new(derived)
    }

    /// Non-negative integer power by repeated multiplication.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::constant(Complex::ONE);

        for _ in 0..exponent {
            result = result * self.clone();
        }

        result
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let length = self.coefficients.len().max(other.coefficients.len());
        let mut sum = vec![Complex::ZERO; length];

        for (power, coefficient) in sum.iter_mut().enumerate() {
            let lhs = self.coefficients.get(power).copied().unwrap_or(Complex::ZERO);
            let rhs = other.coefficients.get(power).copied().unwrap_or(Complex::ZERO);
            *coefficient = lhs + rhs;
        }

        Self::new(sum)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    // Coefficient convolution.
    fn mul(self, other: Self) -> Self {
        let mut product =
            vec![Complex::ZERO; self.coefficients.len() + other.coefficients.len() - 1];

        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] = product[i + j] + *a * *b;
            }
        }

        Self::new(product)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
        }
    }
}
