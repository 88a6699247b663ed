//! Differentiation matrices for the Lagrange interpolant on a node set.
//!
//! The differentiation matrix D maps nodal values to derivative values:
//! (du/dξ)_i = Σ_j D[i,j] * u_j
//!
//! First order, from barycentric weights:
//! D[i,j] = (w_j / w_i) / (x_i - x_j)   for i ≠ j
//! D[i,i] = -Σ_{j≠i} D[i,j]
//!
//! Order m follows from D_0 = I and, for k = 1..=m,
//! D_k[i,j] = k / (x_i - x_j) * ((w_j / w_i) * D_{k-1}[i,i] - D_{k-1}[i,j])
//! with the same negative-row-sum diagonal.

use faer::Mat;

use super::barycentric::{with_negative_row_sum_diagonal, BarycentricWeights};
use crate::basis::NodeSet;
use crate::error::{FemError, Result};

/// First-order differentiation matrix by the direct barycentric formula.
pub fn differentiation_matrix(nodes: &NodeSet) -> Mat<f64> {
    let bw = BarycentricWeights::new(nodes);
    first_order(&bw)
}

/// Differentiation matrix of order `m` by the general recurrence.
///
/// Only D_m is returned. Order 0 is the identity, and order 1 reproduces
/// [`differentiation_matrix`].
pub fn differentiation_matrix_of_order(nodes: &NodeSet, m: usize) -> Mat<f64> {
    let bw = BarycentricWeights::new(nodes);
    let n = bw.len();

    let mut d = Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
    for k in 1..=m {
        d = bw.apply_recurrence(&d, k);
    }
    d
}

/// Order-`m` matrices for every order from 1 to `m`, reusing one set of weights.
pub fn differentiation_matrices(nodes: &NodeSet, m: usize) -> Vec<Mat<f64>> {
    let bw = BarycentricWeights::new(nodes);
    let mut out: Vec<Mat<f64>> = Vec::with_capacity(m);
    if m == 0 {
        return out;
    }
    out.push(first_order(&bw));
    for k in 2..=m {
        let next = bw.apply_recurrence(&out[k - 2], k);
        out.push(next);
    }
    out
}

fn first_order(bw: &BarycentricWeights) -> Mat<f64> {
    let n = bw.len();
    let off = Mat::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            bw.ratios[(i, j)] / bw.differences[(i, j)]
        }
    });
    with_negative_row_sum_diagonal(off)
}

/// Apply D to nodal values.
pub fn apply(d: &Mat<f64>, u: &[f64]) -> Result<Vec<f64>> {
    if d.ncols() != u.len() {
        return Err(FemError::dimension_mismatch("nodal values", d.ncols(), u.len()));
    }
    Ok((0..d.nrows())
        .map(|i| (0..d.ncols()).map(|j| d[(i, j)] * u[j]).sum())
        .collect())
}
