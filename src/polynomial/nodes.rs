//! Node families on the reference interval [-1, 1].
//!
//! All generators return `n + 1` nodes in ascending order for polynomial
//! degree `n`. Gauss-Lobatto and Chebyshev-Lobatto nodes cluster towards the
//! endpoints, which keeps high-degree interpolation well conditioned.

use super::legendre::legendre_and_derivative;
use std::f64::consts::PI;

/// `n + 1` equally spaced nodes, endpoints included.
///
/// Degree 0 gives the single midpoint node.
pub fn equispaced_nodes(n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![0.0];
    }
    (0..=n)
        .map(|j| -1.0 + 2.0 * j as f64 / n as f64)
        .collect()
}

/// `n + 1` Chebyshev-Lobatto nodes x_j = -cos(π j / n).
pub fn chebyshev_lobatto_nodes(n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![0.0];
    }
    let mut nodes: Vec<f64> = (0..=n)
        .map(|j| -(PI * j as f64 / n as f64).cos())
        .collect();
    // cos(π/2) is not exactly zero; pin the endpoints and centre
    nodes[0] = -1.0;
    nodes[n] = 1.0;
    if n % 2 == 0 {
        nodes[n / 2] = 0.0;
    }
    nodes
}

/// `n + 1` Gauss-Lobatto-Legendre nodes: the roots of (1 - x²) P'_n(x).
///
/// Interior nodes are found by Newton iteration started from the
/// Chebyshev-Lobatto nodes. The update for L(x) = (1 - x²) P'_n(x) simplifies
/// with L'(x) = -n(n+1) P_n(x) to
/// x ← x + (1 - x²) P'_n(x) / (n(n+1) P_n(x)).
pub fn gauss_lobatto_nodes(n: usize) -> Vec<f64> {
    let mut nodes = chebyshev_lobatto_nodes(n);
    if n < 2 {
        return nodes;
    }

    let scale = (n * (n + 1)) as f64;
    for x in nodes.iter_mut().take(n).skip(1) {
        for _ in 0..100 {
            let (p, dp) = legendre_and_derivative(n, *x);
            let update = (1.0 - *x * *x) * dp / (scale * p);
            *x += update;
            if update.abs() < 1e-15 {
                break;
            }
        }
    }
    nodes
}

/// Gauss-Legendre rule with `n_points` nodes: (nodes, weights).
///
/// Nodes are the roots of P_n, weights w_i = 2 / ((1 - x_i²) P'_n(x_i)²).
/// Exact for polynomials up to degree 2n - 1.
pub fn gauss_legendre_rule(n_points: usize) -> (Vec<f64>, Vec<f64>) {
    let n = n_points;
    let mut nodes = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for i in 0..n {
        // Tricomi initial guess, ascending order
        let mut x = -(PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let mut dp = 1.0;
        for _ in 0..100 {
            let (p, d) = legendre_and_derivative(n, x);
            dp = d;
            let dx = p / d;
            x -= dx;
            if dx.abs() < 1e-15 {
                break;
            }
        }
        let (_, d) = legendre_and_derivative(n, x);
        if d.is_finite() && d != 0.0 {
            dp = d;
        }
        nodes.push(x);
        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
    }

    (nodes, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equispaced() {
        assert_eq!(equispaced_nodes(0), vec![0.0]);
        assert_eq!(equispaced_nodes(1), vec![-1.0, 1.0]);
        assert_eq!(equispaced_nodes(2), vec![-1.0, 0.0, 1.0]);
        let nodes = equispaced_nodes(4);
        assert!((nodes[1] + 0.5).abs() < 1e-15);
        assert!((nodes[3] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_chebyshev_clustering() {
        let nodes = chebyshev_lobatto_nodes(8);
        assert_eq!(nodes.len(), 9);
        assert_eq!(nodes[4], 0.0);
        // Spacing near the ends is smaller than in the middle
        assert!(nodes[1] - nodes[0] < nodes[5] - nodes[4]);
        assert!(nodes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_gll_nodes_are_roots() {
        for n in 2..=7 {
            let nodes = gauss_lobatto_nodes(n);
            assert_eq!(nodes.len(), n + 1);
            assert_eq!(nodes[0], -1.0);
            assert_eq!(nodes[n], 1.0);
            for (j, &x) in nodes.iter().enumerate().take(n).skip(1) {
                let (_, dp) = legendre_and_derivative(n, x);
                assert!(
                    dp.abs() < 1e-11,
                    "Interior node {} of order {} should be a root of P'_n, got {}",
                    j,
                    n,
                    dp
                );
            }
        }
    }

    #[test]
    fn test_gll_known_order_two() {
        let nodes = gauss_lobatto_nodes(2);
        assert!((nodes[1] - 0.0).abs() < 1e-14);
    }

    #[test]
    fn test_gauss_legendre_exactness() {
        for n in 1..=6 {
            let (nodes, weights) = gauss_legendre_rule(n);
            let total: f64 = weights.iter().sum();
            assert!((total - 2.0).abs() < 1e-13, "Weights should sum to 2");

            for k in 0..2 * n {
                let exact = if k % 2 == 0 {
                    2.0 / (k + 1) as f64
                } else {
                    0.0
                };
                let numerical: f64 = nodes
                    .iter()
                    .zip(&weights)
                    .map(|(&x, &w)| w * x.powi(k as i32))
                    .sum();
                assert!(
                    (numerical - exact).abs() < 1e-12,
                    "{} points, degree {}: expected {}, got {}",
                    n,
                    k,
                    exact,
                    numerical
                );
            }
        }
    }
}
