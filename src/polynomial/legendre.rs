//! Legendre polynomials on [-1, 1].
//!
//! Only used to generate node families and Gauss-Legendre rules, so the
//! value and derivative always come out of a single recurrence sweep.

/// Evaluate P_n(x) and P'_n(x) together.
///
/// Three-term recurrence:
/// (k+1) P_{k+1}(x) = (2k+1) x P_k(x) - k P_{k-1}(x)
///
/// The derivative uses P'_n = n (x P_n - P_{n-1}) / (x² - 1) in the interior
/// and the closed form ±n(n+1)/2 at the endpoints.
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    match n {
        0 => return (1.0, 0.0),
        1 => return (x, 1.0),
        _ => {}
    }

    let (p_prev, p_n) = (1..n).fold((1.0, x), |(p_prev, p_curr), k| {
        let k = k as f64;
        let p_next = ((2.0 * k + 1.0) * x * p_curr - k * p_prev) / (k + 1.0);
        (p_curr, p_next)
    });

    let edge = (n * (n + 1)) as f64 / 2.0;
    let dp_n = if (x - 1.0).abs() < 1e-14 {
        edge
    } else if (x + 1.0).abs() < 1e-14 {
        if n % 2 == 0 {
            -edge
        } else {
            edge
        }
    } else {
        n as f64 * (x * p_n - p_prev) / (x * x - 1.0)
    };

    (p_n, dp_n)
}

/// Evaluate P_n(x).
#[inline]
pub fn legendre(n: usize, x: f64) -> f64 {
    legendre_and_derivative(n, x).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_order_closed_forms() {
        let x = 0.3;
        assert!((legendre(0, x) - 1.0).abs() < 1e-14);
        assert!((legendre(1, x) - x).abs() < 1e-14);
        assert!((legendre(2, x) - (3.0 * x * x - 1.0) / 2.0).abs() < 1e-14);
        assert!((legendre(3, x) - (5.0 * x * x * x - 3.0 * x) / 2.0).abs() < 1e-14);

        let (_, dp3) = legendre_and_derivative(3, x);
        assert!((dp3 - (15.0 * x * x - 3.0) / 2.0).abs() < 1e-13);
    }

    #[test]
    fn test_endpoint_values() {
        for n in 0..=6 {
            let (p, dp) = legendre_and_derivative(n, 1.0);
            assert!((p - 1.0).abs() < 1e-14);
            assert!((dp - (n * (n + 1)) as f64 / 2.0).abs() < 1e-12);

            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            let (p, dp) = legendre_and_derivative(n, -1.0);
            assert!((p - sign).abs() < 1e-14);
            assert!((dp + sign * (n * (n + 1)) as f64 / 2.0).abs() < 1e-12);
        }
    }
}
