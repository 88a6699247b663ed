//! Barycentric weights and the pairwise quantities built from them.
//!
//! w_i = 1 / Π_{j≠i} (x_i - x_j)
//!
//! Products of many node differences overflow or underflow quickly, so the
//! differences are scaled by the capacity C = 4 / (max - min) of the node
//! interval. Differentiation only ever uses the ratios w_j / w_i, which do not
//! depend on C.

use faer::Mat;

use crate::basis::NodeSet;

/// Weight spread above which a node set is reported as ill-conditioned.
pub const WEIGHT_SPREAD_WARNING: f64 = 1e12;

/// Barycentric weights together with the ratio and difference matrices.
#[derive(Clone, Debug)]
pub struct BarycentricWeights {
    /// Scaled barycentric weights w_i
    pub weights: Vec<f64>,
    /// W[i, j] = w_j / w_i
    pub ratios: Mat<f64>,
    /// X[i, j] = x_i - x_j off the diagonal, 1 on the diagonal
    pub differences: Mat<f64>,
}

impl BarycentricWeights {
    /// Compute weights and pairwise matrices for a node set.
    pub fn new(nodes: &NodeSet) -> Self {
        let x = nodes.as_slice();
        let n = x.len();

        let (lo, hi) = nodes.bounds();
        let capacity = if hi > lo { 4.0 / (hi - lo) } else { 1.0 };

        let weights: Vec<f64> = (0..n)
            .map(|i| {
                let prod: f64 = (0..n)
                    .filter(|&j| j != i)
                    .map(|j| capacity * (x[i] - x[j]))
                    .product();
                1.0 / prod
            })
            .collect();

        let ratios = Mat::from_fn(n, n, |i, j| weights[j] / weights[i]);
        let differences = Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { x[i] - x[j] });

        let result = Self {
            weights,
            ratios,
            differences,
        };

        let spread = result.spread();
        if spread > WEIGHT_SPREAD_WARNING {
            log::warn!(
                "Barycentric weight spread {:.3e} for {} nodes; differentiation may lose accuracy",
                spread,
                n
            );
        }

        result
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// max|w| / min|w|, a cheap conditioning indicator for the node set.
    pub fn spread(&self) -> f64 {
        let (lo, hi) = self
            .weights
            .iter()
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), &w| {
                (lo.min(w.abs()), hi.max(w.abs()))
            });
        hi / lo
    }

    /// One step of the higher-order recurrence.
    ///
    /// Given D_{k-1}, returns D_k with
    /// D_k[i, j] = k / X[i, j] · (W[i, j] · D_{k-1}[i, i] - D_{k-1}[i, j])  for i ≠ j
    /// and the diagonal set to the negative row sum.
    pub fn apply_recurrence(&self, prev: &Mat<f64>, k: usize) -> Mat<f64> {
        let n = self.len();
        let kf = k as f64;
        let off = Mat::from_fn(n, n, |i, j| {
            if i == j {
                0.0
            } else {
                kf * (self.ratios[(i, j)] * prev[(i, i)] - prev[(i, j)])
                    / self.differences[(i, j)]
            }
        });
        with_negative_row_sum_diagonal(off)
    }
}

/// Fill the diagonal with -Σ_{j≠i} D[i, j], given a zero diagonal.
///
/// Every row then sums to zero in floating point, which is the
/// discrete statement that constants have zero derivative.
pub(crate) fn with_negative_row_sum_diagonal(mut d: Mat<f64>) -> Mat<f64> {
    let n = d.nrows();
    for i in 0..n {
        let row_sum: f64 = (0..n).map(|j| d[(i, j)]).sum();
        d[(i, i)] = -row_sum;
    }
    d
}
