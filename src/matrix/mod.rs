//! Matrix module: the square `DynamicMatrix` built from row vectors.

pub mod dynamic;
pub use dynamic::DynamicMatrix;
mod io;
mod ops;
