//! Mesh representation.
//!
//! Provides the 1D finite-element mesh and the per-element affine maps:
//! - `Mesh1D`: global nodes partitioned into elements of local degree d
//! - `Element`: physical boundaries of one element and its maps to [-1, 1]

mod element;
mod mesh1d;

pub use element::Element;
pub use mesh1d::Mesh1D;
