//! Vector module: the fixed-size `DynamicVector` and its operations.

pub mod dynamic;
pub use dynamic::{DynamicVector, swap};
mod io;
pub(crate) mod ops;
