//! Interpolation nodes and Lagrange basis functions.

mod lagrange;
mod node_set;

pub(crate) use lagrange::combine;
pub use lagrange::{BasisEvaluation, LagrangeBasis, LagrangeInterpolant};
pub use node_set::NodeSet;
