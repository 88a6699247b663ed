//! Dense polynomials in the monomial basis.
//!
//! Coefficients are stored in ascending power order:
//! p(ξ) = c_0 + c_1 ξ + ... + c_n ξ^n
//!
//! This is the representation used on every hot path (quadrature sampling,
//! batched evaluation): a single Horner sweep per point.

use std::fmt;

/// Evaluate ascending-order coefficients at `x` with Horner's rule.
#[inline]
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Real polynomial with ascending-power coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from ascending coefficients.
    ///
    /// An empty vector is treated as the zero polynomial.
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::constant(0.0);
        }
        Self { coeffs }
    }

    /// Constant polynomial.
    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Monic polynomial with the given roots: Π_j (ξ - r_j).
    pub fn from_roots(roots: &[f64]) -> Self {
        roots
            .iter()
            .fold(Self::constant(1.0), |p, &r| p.mul_linear(r))
    }

    /// Multiply by the linear factor (ξ - root).
    pub fn mul_linear(&self, root: f64) -> Self {
        let n = self.coeffs.len();
        let mut out = vec![0.0; n + 1];
        for (k, &c) in self.coeffs.iter().enumerate() {
            out[k + 1] += c;
            out[k] -= root * c;
        }
        Self { coeffs: out }
    }

    /// Divide by the linear factor (ξ - root) using synthetic division.
    ///
    /// Returns `(quotient, remainder)`. When `root` is a root of `self` the
    /// remainder is zero up to rounding and the quotient is the exact cofactor,
    /// so no evaluation ever happens at the removed singularity.
    pub fn div_linear(&self, root: f64) -> (Self, f64) {
        let n = self.coeffs.len();
        if n == 1 {
            return (Self::constant(0.0), self.coeffs[0]);
        }

        let mut quotient = vec![0.0; n - 1];
        let mut carry = self.coeffs[n - 1];
        quotient[n - 2] = carry;
        for k in (1..n - 1).rev() {
            carry = self.coeffs[k] + root * carry;
            quotient[k - 1] = carry;
        }
        let remainder = self.coeffs[0] + root * carry;

        (Self { coeffs: quotient }, remainder)
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: f64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|&a| a * c).collect(),
        }
    }

    /// First derivative.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::constant(0.0);
        }
        Self {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, &c)| k as f64 * c)
                .collect(),
        }
    }

    /// Nominal degree (length of the coefficient vector minus one).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Ascending coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluate at `x`.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        horner(&self.coeffs, x)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 && self.coeffs.len() > 1 {
                continue;
            }
            let c = if first {
                c
            } else if c.is_sign_negative() {
                write!(f, " - ")?;
                -c
            } else {
                write!(f, " + ")?;
                c
            };
            match k {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{k}")?,
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
