//! Core container traits for tmatrix.

use crate::error::Result;

/// Anything storable in a `DynamicVector`: default-constructible, copyable, comparable.
pub trait Element: Clone + Default + PartialEq {}

impl<T: Clone + Default + PartialEq> Element for T {}

/// Uniform size query for vectors and matrices.
pub trait Dimension {
    /// Length for a vector, rows (== columns) for a matrix.
    fn size(&self) -> usize;
}

/// Inner product: x · y.
pub trait InnerProduct<Rhs = Self> {
    /// Associated scalar type.
    type Scalar;
    /// Compute dot(self, rhs).
    fn dot(&self, rhs: &Rhs) -> Result<Self::Scalar>;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V) -> Result<V>;
}
