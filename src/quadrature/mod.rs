//! One-dimensional numerical integration over finite intervals.
//!
//! Assembly only needs `integrate(f, a, b) -> (value, error)`, so the rules
//! live behind the [`Integrator`] trait:
//! - [`GaussKronrod`]: adaptive G7/K15 with bisection of the worst interval
//! - [`GaussLegendre`]: fixed n-point rule, error estimated against n + 1 points

mod gauss_kronrod;
mod gauss_legendre;

pub use gauss_kronrod::GaussKronrod;
pub use gauss_legendre::GaussLegendre;

use crate::error::{FemError, Result};

/// Outcome of integrating over one interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadResult {
    /// Approximate integral
    pub value: f64,
    /// Estimated absolute error
    pub error: f64,
    /// Number of integrand evaluations
    pub n_evals: usize,
    /// Whether the requested tolerance was reached
    pub converged: bool,
}

/// Options for adaptive quadrature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadOptions {
    /// Relative tolerance (default: 1e-10)
    pub rtol: f64,
    /// Absolute tolerance (default: 1e-12)
    pub atol: f64,
    /// Maximum number of subintervals (default: 50)
    pub limit: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-10,
            atol: 1e-12,
            limit: 50,
        }
    }
}

impl QuadOptions {
    pub fn with_rtol(mut self, rtol: f64) -> Self {
        self.rtol = rtol;
        self
    }

    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Check tolerances and limit.
    pub fn validate(&self) -> Result<()> {
        if !(self.rtol >= 0.0) || !(self.atol >= 0.0) {
            return Err(FemError::InvalidQuadrature(format!(
                "tolerances must be non-negative (rtol = {}, atol = {})",
                self.rtol, self.atol
            )));
        }
        if self.limit == 0 {
            return Err(FemError::InvalidQuadrature(
                "subdivision limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// A rule that integrates a real function over a finite interval.
pub trait Integrator {
    /// Approximate ∫_a^b f(x) dx.
    ///
    /// `a > b` yields the negated integral over [b, a]; `a == b` yields zero.
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64;
}

pub(crate) fn check_bounds(a: f64, b: f64) -> Result<()> {
    if !a.is_finite() || !b.is_finite() {
        return Err(FemError::InvalidQuadrature(format!(
            "integration bounds must be finite, got [{a}, {b}]"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_valid() {
        assert!(QuadOptions::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        assert!(QuadOptions::default().with_rtol(-1.0).validate().is_err());
        assert!(QuadOptions::default().with_atol(f64::NAN).validate().is_err());
        assert!(QuadOptions::default().with_limit(0).validate().is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(check_bounds(0.0, 1.0).is_ok());
        assert!(check_bounds(0.0, f64::INFINITY).is_err());
    }
}
