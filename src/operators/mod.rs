//! Reference-element operators built from barycentric weights.
//!
//! This module provides:
//! - Barycentric weights with their ratio and difference matrices (`BarycentricWeights`)
//! - First- and higher-order differentiation matrices
//! - The bundled reference element used by assembly and evaluation (`ReferenceElement`)

mod barycentric;
mod differentiation;

pub use barycentric::{BarycentricWeights, WEIGHT_SPREAD_WARNING};
pub use differentiation::{
    apply, differentiation_matrices, differentiation_matrix, differentiation_matrix_of_order,
};

use crate::basis::{BasisEvaluation, LagrangeBasis, NodeSet};
use crate::error::{FemError, Result};
use faer::Mat;

/// Everything needed on [-1, 1] for elements of one local degree.
///
/// All elements of equal degree share one reference element, so this is
/// built once per degree and reused across the mesh.
#[derive(Clone, Debug)]
pub struct ReferenceElement {
    /// Local polynomial degree
    pub degree: usize,
    /// Lagrange basis on the reference nodes
    pub basis: LagrangeBasis,
    /// First-order differentiation matrix on the reference nodes
    pub dr: Mat<f64>,
}

impl ReferenceElement {
    /// Reference element on `degree + 1` equispaced nodes.
    pub fn new(degree: usize) -> Result<Self> {
        if degree == 0 {
            return Err(FemError::InvalidDegree(degree));
        }
        Self::from_nodes(NodeSet::equispaced(degree))
    }

    /// Reference element on an arbitrary node set.
    pub fn from_nodes(nodes: NodeSet) -> Result<Self> {
        let degree = nodes.degree();
        let dr = differentiation_matrix(&nodes);
        let basis = LagrangeBasis::new(nodes)?;
        Ok(Self { degree, basis, dr })
    }

    /// Select the basis evaluation strategy.
    pub fn with_evaluation(mut self, evaluation: BasisEvaluation) -> Self {
        self.basis = self.basis.with_evaluation(evaluation);
        self
    }

    /// Number of local nodes (degree + 1).
    pub fn n_nodes(&self) -> usize {
        self.degree + 1
    }

    /// Reference-coordinate derivative of local nodal values: Dr · u.
    pub fn derivative(&self, local: &[f64]) -> Result<Vec<f64>> {
        if local.len() != self.n_nodes() {
            return Err(FemError::dimension_mismatch(
                "local values",
                self.n_nodes(),
                local.len(),
            ));
        }
        apply(&self.dr, local)
    }
}
