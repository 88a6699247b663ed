//! Global assembly from per-element contributions.

mod load;

#[cfg(feature = "parallel")]
pub use load::assemble_load_vector_parallel;
pub use load::{assemble_load_vector, element_load_vector, LoadAssembler};
