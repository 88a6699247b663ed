//! Lagrange basis functions on an arbitrary node set.
//!
//! For nodes x_0, ..., x_n the i-th basis function is
//!
//! ℓ_i(ξ) = Π_{j≠i} (ξ - x_j) / Π_{j≠i} (x_i - x_j)
//!
//! so that ℓ_i(x_k) = δ_{ik}. Two interchangeable evaluation strategies are
//! available: the product form above, and an ascending coefficient vector
//! evaluated with Horner's rule. The coefficient vector is obtained from the
//! full nodal polynomial Π_j (ξ - x_j) by exact synthetic division by
//! (ξ - x_i), never by evaluating near the removable singularity.
//!
//! Both strategies work in the normalized coordinate
//!
//! t = (ξ - c) · s,   c = (max + min) / 2,   s = 2 / (max - min)
//!
//! which maps the node hull onto [-1, 1]. Products of node differences then
//! stay representable for clustered nodes. For nodes spanning [-1, 1] the map
//! is the identity, so t = ξ exactly.

use faer::Mat;

use super::NodeSet;
use crate::error::{FemError, Result};
use crate::polynomial::Polynomial;

/// Strategy used to evaluate basis functions pointwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BasisEvaluation {
    /// Product over the other nodes divided by the stored denominator.
    Product,
    /// Horner evaluation of the expanded ascending coefficients.
    #[default]
    Coefficients,
}

/// Complete Lagrange basis for one node set.
#[derive(Clone, Debug)]
pub struct LagrangeBasis {
    nodes: NodeSet,
    /// Nodes in the normalized coordinate
    scaled_nodes: Vec<f64>,
    /// Centre c of the normalization
    centre: f64,
    /// Scale s of the normalization
    scale: f64,
    /// Π_{j≠i} (t_i - t_j)
    denominators: Vec<f64>,
    /// ℓ_i in the monomial basis of t
    polynomials: Vec<Polynomial>,
    evaluation: BasisEvaluation,
}

impl LagrangeBasis {
    /// Build the basis for a validated node set.
    ///
    /// Fails with `IllConditionedNodes` when a denominator or coefficient of
    /// some ℓ_i is not representable even after normalization.
    pub fn new(nodes: NodeSet) -> Result<Self> {
        let x = nodes.as_slice();
        let (lo, hi) = nodes.bounds();
        let (centre, scale) = if hi > lo {
            (0.5 * (lo + hi), 2.0 / (hi - lo))
        } else {
            (lo, 1.0)
        };

        let t: Vec<f64> = x.iter().map(|&xi| (xi - centre) * scale).collect();
        let nodal = Polynomial::from_roots(&t);

        let mut denominators = Vec::with_capacity(t.len());
        let mut polynomials = Vec::with_capacity(t.len());

        for (i, &ti) in t.iter().enumerate() {
            let mut denom = 1.0;
            for (j, &tj) in t.iter().enumerate() {
                if j == i {
                    continue;
                }
                let diff = ti - tj;
                if diff == 0.0 {
                    return Err(FemError::DegenerateNodes {
                        first: i.min(j),
                        second: i.max(j),
                        value: x[i],
                    });
                }
                denom *= diff;
            }
            if !denom.is_finite() || denom == 0.0 {
                return Err(FemError::IllConditionedNodes { index: i });
            }

            let (numerator, _remainder) = nodal.div_linear(ti);
            let poly = numerator.scale(1.0 / denom);
            if !poly.coefficients().iter().all(|c| c.is_finite()) {
                return Err(FemError::IllConditionedNodes { index: i });
            }
            polynomials.push(poly);
            denominators.push(denom);
        }

        log::debug!(
            "Built Lagrange basis of degree {} on {:?}",
            nodes.degree(),
            nodes.bounds()
        );

        Ok(Self {
            nodes,
            scaled_nodes: t,
            centre,
            scale,
            denominators,
            polynomials,
            evaluation: BasisEvaluation::default(),
        })
    }

    /// Basis on `d + 1` equispaced nodes of [-1, 1], the reference element basis.
    pub fn equispaced(d: usize) -> Result<Self> {
        Self::new(NodeSet::equispaced(d))
    }

    /// Select the pointwise evaluation strategy.
    pub fn with_evaluation(mut self, evaluation: BasisEvaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn evaluation(&self) -> BasisEvaluation {
        self.evaluation
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Number of basis functions.
    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Polynomial degree of every basis function.
    pub fn degree(&self) -> usize {
        self.nodes.degree()
    }

    /// (centre, scale) of the normalized coordinate t = (ξ - centre) · scale.
    pub fn normalization(&self) -> (f64, f64) {
        (self.centre, self.scale)
    }

    /// Map ξ to the normalized coordinate.
    #[inline]
    pub fn normalize(&self, xi: f64) -> f64 {
        (xi - self.centre) * self.scale
    }

    /// Monomial coefficients of ℓ_i in the normalized coordinate t, or `None`
    /// past the last basis function.
    pub fn polynomial(&self, i: usize) -> Option<&Polynomial> {
        self.polynomials.get(i)
    }

    pub fn polynomials(&self) -> &[Polynomial] {
        &self.polynomials
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.len() {
            return Err(FemError::BasisIndexOutOfRange {
                index: i,
                n_basis: self.len(),
            });
        }
        Ok(())
    }

    /// Evaluate ℓ_i at ξ with the selected strategy.
    pub fn evaluate(&self, i: usize, xi: f64) -> Result<f64> {
        self.check_index(i)?;
        Ok(self.evaluate_unchecked(i, xi))
    }

    /// Evaluation without the range check; `i` must be < `len()`.
    #[inline]
    pub(crate) fn evaluate_unchecked(&self, i: usize, xi: f64) -> f64 {
        let t = self.normalize(xi);
        match self.evaluation {
            BasisEvaluation::Product => self.evaluate_product(i, t),
            BasisEvaluation::Coefficients => self.polynomials[i].eval(t),
        }
    }

    fn evaluate_product(&self, i: usize, t: f64) -> f64 {
        let numer: f64 = self
            .scaled_nodes
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &tj)| t - tj)
            .product();
        numer / self.denominators[i]
    }

    /// Values of every basis function at ξ.
    pub fn evaluate_all(&self, xi: f64) -> Vec<f64> {
        (0..self.len()).map(|i| self.evaluate_unchecked(i, xi)).collect()
    }

    /// Basis values at many points: V[(i, p)] = ℓ_i(ξ_p).
    pub fn evaluate_matrix(&self, points: &[f64]) -> Mat<f64> {
        Mat::from_fn(self.len(), points.len(), |i, p| {
            self.evaluate_unchecked(i, points[p])
        })
    }

    /// Interpolant Σ_j u_j ℓ_j for nodal values `values`.
    pub fn interpolant<'a>(&'a self, values: &'a [f64]) -> Result<LagrangeInterpolant<'a>> {
        if values.len() != self.len() {
            return Err(FemError::dimension_mismatch(
                "nodal values",
                self.len(),
                values.len(),
            ));
        }
        Ok(LagrangeInterpolant {
            basis: self,
            values,
        })
    }
}

/// Linear combination of basis functions weighted by nodal values.
#[derive(Clone, Copy, Debug)]
pub struct LagrangeInterpolant<'a> {
    basis: &'a LagrangeBasis,
    values: &'a [f64],
}

impl LagrangeInterpolant<'_> {
    /// Evaluate Σ_j u_j ℓ_j(ξ).
    #[inline]
    pub fn evaluate(&self, xi: f64) -> f64 {
        combine(self.basis, self.values, xi)
    }

    /// Expand the interpolant into a single polynomial in the normalized
    /// coordinate of the basis.
    pub fn to_polynomial(&self) -> Polynomial {
        let n = self.basis.len();
        let mut coeffs = vec![0.0; n];
        for (poly, &u) in self.basis.polynomials().iter().zip(self.values) {
            for (c, &a) in coeffs.iter_mut().zip(poly.coefficients()) {
                *c += u * a;
            }
        }
        Polynomial::new(coeffs)
    }
}

/// Σ_r u_r ℓ_r(ξ), summed in index order.
///
/// Scalar and batched evaluation both reduce through here so that they agree
/// bit for bit. `values` must not be longer than the basis.
#[inline]
pub(crate) fn combine(basis: &LagrangeBasis, values: &[f64], xi: f64) -> f64 {
    values
        .iter()
        .enumerate()
        .fold(0.0, |acc, (r, &u)| acc + u * basis.evaluate_unchecked(r, xi))
}
