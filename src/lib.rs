//! tmatrix: fixed-size heap vectors and square matrices
//!
//! This crate provides `DynamicVector<T>`, a vector whose length is fixed at
//! construction, and `DynamicMatrix<T>`, a square matrix composed of such
//! vectors. Both offer an unchecked fast-path index next to a checked `at`,
//! element-wise and scalar arithmetic, dot / matrix products, and
//! whitespace-separated text I/O. Every failure is reported through
//! [`TmError`].

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::DynamicMatrix;
pub use vector::DynamicVector;
