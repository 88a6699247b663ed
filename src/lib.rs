//! # lagrange-fem
//!
//! Building blocks for one-dimensional continuous finite elements.
//!
//! This crate provides:
//! - Lagrange bases on arbitrary distinct reference nodes
//! - Barycentric differentiation matrices of any order
//! - Meshes of degree-d elements with affine maps to [-1, 1]
//! - Load vector assembly with adaptive or fixed quadrature
//! - Scalar and batched evaluation of mesh functions
//!
//! Enable the `parallel` feature for rayon-based element assembly and
//! batched evaluation.

pub mod assembly;
pub mod basis;
pub mod error;
pub mod evaluate;
pub mod mesh;
pub mod operators;
pub mod polynomial;
pub mod quadrature;

// Re-export main types for convenience
pub use assembly::{assemble_load_vector, element_load_vector, LoadAssembler};
pub use basis::{BasisEvaluation, LagrangeBasis, LagrangeInterpolant, NodeSet};
pub use error::{FemError, Result};
pub use evaluate::{fe_evaluate, fe_evaluate_batch, DomainPolicy, EvaluationConfig, FeFunction};
pub use mesh::{Element, Mesh1D};
pub use operators::{
    differentiation_matrices, differentiation_matrix, differentiation_matrix_of_order,
    BarycentricWeights, ReferenceElement,
};
pub use polynomial::Polynomial;
pub use quadrature::{GaussKronrod, GaussLegendre, Integrator, QuadOptions, QuadResult};

#[cfg(feature = "parallel")]
pub use assembly::assemble_load_vector_parallel;
