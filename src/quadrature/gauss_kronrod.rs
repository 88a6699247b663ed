//! Adaptive Gauss-Kronrod quadrature (7-point Gauss, 15-point Kronrod).
//!
//! Each subinterval is integrated with the K15 rule; the embedded G7 rule
//! gives the local error estimate |K15 - G7|. The subinterval with the largest
//! estimate is bisected until the total error meets max(atol, rtol * |I|) or
//! the subdivision limit is reached.

use super::{check_bounds, Integrator, QuadOptions, QuadResult};
use crate::error::Result;

/// Kronrod abscissae on [0, 1); odd indices are the Gauss nodes, last is the centre.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching `XGK`.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_2,
    0.140_653_259_715_525_9,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_8,
];

/// Gauss weights for XGK[1], XGK[3], XGK[5] and the centre.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Adaptive G7/K15 integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussKronrod {
    pub options: QuadOptions,
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl GaussKronrod {
    pub fn new(options: QuadOptions) -> Self {
        Self { options }
    }

    fn tolerance(&self, value: f64) -> f64 {
        self.options.atol.max(self.options.rtol * value.abs())
    }
}

/// Apply the K15 rule on [a, b] and return (K15, |K15 - G7|).
fn kronrod15<F>(f: &F, a: f64, b: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    let centre = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f(centre);
    let mut res_k = fc * WGK[7];
    let mut res_g = fc * WG[3];

    for j in 0..3 {
        let k = 2 * j + 1;
        let dx = half * XGK[k];
        let sum = f(centre - dx) + f(centre + dx);
        res_g += WG[j] * sum;
        res_k += WGK[k] * sum;
    }
    for j in 0..4 {
        let k = 2 * j;
        let dx = half * XGK[k];
        res_k += WGK[k] * (f(centre - dx) + f(centre + dx));
    }

    (res_k * half, ((res_k - res_g) * half).abs())
}

impl Integrator for GaussKronrod {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        self.options.validate()?;
        check_bounds(a, b)?;

        if a == b {
            return Ok(QuadResult {
                value: 0.0,
                error: 0.0,
                n_evals: 0,
                converged: true,
            });
        }

        let (value, error) = kronrod15(&f, a, b);
        let mut segments = vec![Segment { a, b, value, error }];
        let mut n_evals = 15;
        let mut total = value;
        let mut total_error = error;

        while total_error > self.tolerance(total)
            && total_error.is_finite()
            && segments.len() < self.options.limit
        {
            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, s), (_, t)| s.error.total_cmp(&t.error))
                .map(|(i, _)| i)
                .unwrap_or(0);
            let seg = segments.swap_remove(worst);
            let mid = 0.5 * (seg.a + seg.b);

            let (v_left, e_left) = kronrod15(&f, seg.a, mid);
            let (v_right, e_right) = kronrod15(&f, mid, seg.b);
            n_evals += 30;

            segments.push(Segment {
                a: seg.a,
                b: mid,
                value: v_left,
                error: e_left,
            });
            segments.push(Segment {
                a: mid,
                b: seg.b,
                value: v_right,
                error: e_right,
            });

            total = segments.iter().map(|s| s.value).sum();
            total_error = segments.iter().map(|s| s.error).sum();
        }

        let converged = total_error <= self.tolerance(total);
        if !converged {
            log::warn!(
                "Gauss-Kronrod on [{}, {}] stopped after {} subintervals with error {:.3e}",
                a,
                b,
                segments.len(),
                total_error
            );
        }

        Ok(QuadResult {
            value: total,
            error: total_error,
            n_evals,
            converged,
        })
    }
}
