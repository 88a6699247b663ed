//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors raised by basis construction, mesh mapping, integration and evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FemError {
    /// A node set must contain at least one node.
    #[error("Node set is empty")]
    EmptyNodeSet,

    /// Node is NaN or infinite.
    #[error("Node {index} is not finite: {value}")]
    NonFiniteNode { index: usize, value: f64 },

    /// Two interpolation nodes coincide, so the Lagrange denominator vanishes.
    #[error("Degenerate basis: nodes {first} and {second} coincide at {value}")]
    DegenerateNodes {
        first: usize,
        second: usize,
        value: f64,
    },

    /// Nodes are distinct but a Lagrange denominator or coefficient is not
    /// representable in floating point.
    #[error("Ill-conditioned basis: basis function {index} is not representable")]
    IllConditionedNodes { index: usize },

    /// Basis function index past the end of the basis.
    #[error("Basis function {index} out of range (basis has {n_basis} functions)")]
    BasisIndexOutOfRange { index: usize, n_basis: usize },

    /// Mesh coordinates or layout are unusable.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Local polynomial degree must be at least 1.
    #[error("Invalid local degree: {0}")]
    InvalidDegree(usize),

    /// Element index past the end of the mesh.
    #[error("Element {element} out of range (mesh has {n_elements} elements)")]
    ElementOutOfRange { element: usize, n_elements: usize },

    /// Query point outside the mesh under the reject policy.
    #[error("Point {point} lies outside the mesh [{x_min}, {x_max}]")]
    OutOfDomain { point: f64, x_min: f64, x_max: f64 },

    /// Sizes of two collaborating inputs disagree.
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Quadrature options or interval are unusable.
    #[error("Invalid quadrature: {0}")]
    InvalidQuadrature(String),
}

impl FemError {
    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FemError>;
