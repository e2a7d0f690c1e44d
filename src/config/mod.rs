//! Construction limits.

pub mod limits;
pub use limits::{Limits, MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
