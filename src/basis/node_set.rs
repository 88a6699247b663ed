//! Interpolation node sets.

use crate::error::{FemError, Result};
use crate::polynomial::{chebyshev_lobatto_nodes, equispaced_nodes, gauss_lobatto_nodes};

/// Ordered set of distinct interpolation nodes.
///
/// A node set with `n + 1` nodes supports a Lagrange basis of degree `n`.
/// Nodes may appear in any order; they are immutable once validated.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSet {
    nodes: Vec<f64>,
}

impl NodeSet {
    /// Validate and wrap a node vector.
    ///
    /// Fails on an empty vector, non-finite values, or repeated nodes.
    pub fn new(nodes: Vec<f64>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(FemError::EmptyNodeSet);
        }
        if let Some((index, &value)) = nodes.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(FemError::NonFiniteNode { index, value });
        }

        // Sort a permutation so duplicates are adjacent, then report input indices
        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| nodes[a].total_cmp(&nodes[b]));
        for pair in order.windows(2) {
            let (a, b) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            if nodes[a] == nodes[b] {
                return Err(FemError::DegenerateNodes {
                    first: a,
                    second: b,
                    value: nodes[a],
                });
            }
        }

        Ok(Self { nodes })
    }

    /// Equally spaced nodes on [-1, 1] for degree `n`.
    pub fn equispaced(n: usize) -> Self {
        Self {
            nodes: equispaced_nodes(n),
        }
    }

    /// Gauss-Lobatto-Legendre nodes on [-1, 1] for degree `n`.
    pub fn gauss_lobatto(n: usize) -> Self {
        Self {
            nodes: gauss_lobatto_nodes(n),
        }
    }

    /// Chebyshev-Lobatto nodes on [-1, 1] for degree `n`.
    pub fn chebyshev_lobatto(n: usize) -> Self {
        Self {
            nodes: chebyshev_lobatto_nodes(n),
        }
    }

    /// Polynomial degree supported by this node set.
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a validated node set.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.nodes
    }

    /// Smallest and largest node.
    pub fn bounds(&self) -> (f64, f64) {
        self.nodes
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    }
}

impl TryFrom<Vec<f64>> for NodeSet {
    type Error = FemError;

    fn try_from(nodes: Vec<f64>) -> Result<Self> {
        Self::new(nodes)
    }
}

impl TryFrom<&[f64]> for NodeSet {
    type Error = FemError;

    fn try_from(nodes: &[f64]) -> Result<Self> {
        Self::new(nodes.to_vec())
    }
}
