use std::ops::{Add, Mul};

use crate::arithmetic::traits::Field;
use crate::field::FieldResult;

/// Represents a univariate polynomial over a field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: Field> {
    /// Coefficients in ascending order of degree, without trailing zeros
    coefficients: Vec<F>,
}

impl<F: Field> Polynomial<F> {
    /// Creates a new polynomial from its coefficients
    pub fn new(mut coefficients: Vec<F>) -> Self {
        while coefficients.len() > 1 && matches!(coefficients.last(), Some(c) if c.is_zero()) {
            coefficients.pop();
        }
        // The zero polynomial keeps a single zero coefficient
        if coefficients.is_empty() {
            coefficients.push(F::zero());
        }
        Self { coefficients }
    }

    /// Returns the degree of the polynomial; the zero polynomial has degree 0
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    pub fn zero() -> Self {
        Self::new(vec![F::zero()])
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Evaluates the polynomial at `x` using Horner's method
    pub fn evaluate(&self, x: &F) -> F {
        self.coefficients
            .iter()
            .rev()
            .fold(F::zero(), |acc, coeff| acc * *x + *coeff)
    }

    /// Evaluates the polynomial at every point in `xs`
    #[cfg(feature = "parallel")]
    pub fn evaluate_many(&self, xs: &[F]) -> Vec<F> {
        use rayon::prelude::*;
        xs.par_iter().map(|x| self.evaluate(x)).collect()
    }

    /// Evaluates the polynomial at every point in `xs`
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_many(&self, xs: &[F]) -> Vec<F> {
        xs.iter().map(|x| self.evaluate(x)).collect()
    }

    /// Computes the formal derivative of the polynomial
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, coeff)| *coeff * F::from_u64(i as u64))
            .collect();
        Self::new(result)
    }

    /// Lagrange interpolation through `points`.
    ///
    /// Repeated x-coordinates fail with `DivisionByZero`.
    pub fn interpolate(points: &[(F, F)]) -> FieldResult<Self> {
        let mut result = Self::zero();

        for (i, (xi, yi)) in points.iter().enumerate() {
            let mut term = Self::new(vec![*yi]);

            for (j, (xj, _)) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                let denom_inv = (*xi - *xj).inverse()?;
                // (x - xj) / (xi - xj)
                let factor = Self::new(vec![-*xj * denom_inv, denom_inv]);
                term = &term * &factor;
            }

            result = &result + &term;
        }

        Ok(result)
    }
}

impl<'a, F: Field> Add for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: Self) -> Self::Output {
        let max_len = self.coefficients.len().max(other.coefficients.len());
        let mut result = vec![F::zero(); max_len];

        for (i, coeff) in self.coefficients.iter().enumerate() {
            result[i] = *coeff;
        }

        for (i, coeff) in other.coefficients.iter().enumerate() {
            result[i] += *coeff;
        }

        Polynomial::new(result)
    }
}

impl<'a, F: Field> Mul for &'a Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: Self) -> Self::Output {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }

        let n = self.coefficients.len();
        let m = other.coefficients.len();
        let mut result = vec![F::zero(); n + m - 1];

        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                result[i + j] += *a * *b;
            }
        }

        Polynomial::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fp::Fp;

    fn poly(coeffs: &[u64]) -> Polynomial<Fp> {
        Polynomial::new(coeffs.iter().map(|&c| Fp::from(c)).collect())
    }

    #[test]
    fn test_trailing_zeros_are_trimmed() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coefficients().len(), 2);
        assert!(poly(&[]).is_zero());
        assert!(poly(&[0, 0]).is_zero());
    }

    #[test]
    fn test_derivative() {
        // 4x^3 + 2x + 1 -> 12x^2 + 2
        assert_eq!(poly(&[1, 2, 0, 4]).derivative(), poly(&[2, 0, 12]));
        assert!(poly(&[9]).derivative().is_zero());
    }
}
