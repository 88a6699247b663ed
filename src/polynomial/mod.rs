//! Polynomial arithmetic and node generation.
//!
//! This module provides:
//! - Dense monomial-basis polynomials with Horner evaluation
//! - 1D Legendre polynomials and their derivatives
//! - Node families on [-1, 1]: equispaced, Chebyshev-Lobatto, Gauss-Lobatto-Legendre
//! - Gauss-Legendre quadrature rules

mod legendre;
mod nodes;
mod power;

pub use legendre::{legendre, legendre_and_derivative};
pub use nodes::{
    chebyshev_lobatto_nodes, equispaced_nodes, gauss_legendre_rule, gauss_lobatto_nodes,
};
pub use power::{horner, Polynomial};
