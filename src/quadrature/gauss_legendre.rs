//! Fixed-order Gauss-Legendre quadrature.

use super::{check_bounds, Integrator, QuadResult};
use crate::error::{FemError, Result};
use crate::polynomial::gauss_legendre_rule;

/// n-point Gauss-Legendre rule on [-1, 1], mapped to each interval.
///
/// Exact for polynomials up to degree 2n - 1. The error estimate is the
/// difference against the (n + 1)-point rule.
#[derive(Clone, Debug)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
    nodes_fine: Vec<f64>,
    weights_fine: Vec<f64>,
}

impl GaussLegendre {
    pub fn new(n_points: usize) -> Result<Self> {
        if n_points == 0 {
            return Err(FemError::InvalidQuadrature(
                "Gauss-Legendre rule needs at least one point".into(),
            ));
        }
        let (nodes, weights) = gauss_legendre_rule(n_points);
        let (nodes_fine, weights_fine) = gauss_legendre_rule(n_points + 1);
        Ok(Self {
            nodes,
            weights,
            nodes_fine,
            weights_fine,
        })
    }

    /// Rule exact for polynomials of degree `degree`.
    pub fn exact_for_degree(degree: usize) -> Result<Self> {
        Self::new(degree / 2 + 1)
    }

    pub fn n_points(&self) -> usize {
        self.nodes.len()
    }
}

fn apply_rule<F>(f: &F, nodes: &[f64], weights: &[f64], a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let centre = 0.5 * (a + b);
    let half = 0.5 * (b - a);
    let sum: f64 = nodes
        .iter()
        .zip(weights)
        .map(|(&x, &w)| w * f(centre + half * x))
        .sum();
    half * sum
}

impl Integrator for GaussLegendre {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        check_bounds(a, b)?;
        let value = apply_rule(&f, &self.nodes, &self.weights, a, b);
        let fine = apply_rule(&f, &self.nodes_fine, &self.weights_fine, a, b);
        Ok(QuadResult {
            value,
            error: (fine - value).abs(),
            n_evals: self.nodes.len() + self.nodes_fine.len(),
            converged: true,
        })
    }
}
