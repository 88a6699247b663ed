//! Evaluation of finite-element functions at physical points.
//!
//! A mesh function is a DOF vector with one value per global mesh node. At a
//! physical point p it is evaluated by locating the owning element, mapping p
//! to the reference coordinate ξ and summing Σ_r u[d*e + r] ℓ_r(ξ).
//!
//! Points outside [x_0, x_N] follow an explicit [`DomainPolicy`] applied the
//! same way by the scalar and batched paths.

mod fe_function;

pub use fe_function::{fe_evaluate, fe_evaluate_batch, FeFunction};

/// Treatment of query points outside the mesh interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Points left of x_0 use the first element and points right of x_N use
    /// the last; the local polynomial is extrapolated.
    #[default]
    Clamp,
    /// Points outside [x_0, x_N] (and NaN) are rejected with `OutOfDomain`.
    Reject,
}

/// Evaluation settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvaluationConfig {
    pub policy: DomainPolicy,
}

impl EvaluationConfig {
    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }
}
