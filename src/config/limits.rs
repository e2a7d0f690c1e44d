//! Size ceilings for vectors and matrices.
//!
//! This module provides the hard upper bounds enforced at construction and the
//! `Limits` struct, which lets API callers tighten those bounds. Every
//! constructor in the crate funnels its size check through `Limits`.

use crate::error::{Result, TmError};

/// Hard upper bound on the length of a `DynamicVector`.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Hard upper bound on the dimension of a `DynamicMatrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Construction ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest vector length accepted
    pub max_vector_size: usize,

    /// Largest matrix dimension accepted
    pub max_matrix_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vector_size: MAX_VECTOR_SIZE,
            max_matrix_size: MAX_MATRIX_SIZE,
        }
    }
}

impl Limits {
    /// Build custom limits. Both values must lie in `1..=` their hard ceiling.
    pub fn new(max_vector_size: usize, max_matrix_size: usize) -> Result<Self> {
        if max_vector_size == 0 || max_vector_size > MAX_VECTOR_SIZE {
            return Err(TmError::InvalidArgument(format!(
                "max_vector_size {max_vector_size} outside 1..={MAX_VECTOR_SIZE}"
            )));
        }
        if max_matrix_size == 0 || max_matrix_size > MAX_MATRIX_SIZE {
            return Err(TmError::InvalidArgument(format!(
                "max_matrix_size {max_matrix_size} outside 1..={MAX_MATRIX_SIZE}"
            )));
        }
        Ok(Self { max_vector_size, max_matrix_size })
    }

    /// Validate a requested vector length.
    pub fn check_vector(&self, size: usize) -> Result<()> {
        check(size, self.max_vector_size, "vector")
    }

    /// Validate a requested matrix dimension. Each row is a vector of
    /// length `size`, so the vector ceiling applies as well.
    pub fn check_matrix(&self, size: usize) -> Result<()> {
        check(size, self.max_matrix_size, "matrix")?;
        self.check_vector(size)
    }
}

fn check(size: usize, max: usize, what: &str) -> Result<()> {
    if size == 0 || size > max {
        log::debug!("rejecting {what} size {size} (max {max})");
        return Err(TmError::InvalidSize { size, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_ceilings() {
        let l = Limits::default();
        assert_eq!(l.max_vector_size, MAX_VECTOR_SIZE);
        assert_eq!(l.max_matrix_size, MAX_MATRIX_SIZE);
        assert!(l.check_vector(MAX_VECTOR_SIZE).is_ok());
        assert!(l.check_matrix(MAX_MATRIX_SIZE).is_ok());
    }

    #[test]
    fn zero_and_oversize_rejected() {
        let l = Limits::default();
        assert!(matches!(l.check_vector(0), Err(TmError::InvalidSize { size: 0, .. })));
        assert!(matches!(
            l.check_matrix(MAX_MATRIX_SIZE + 1),
            Err(TmError::InvalidSize { max: MAX_MATRIX_SIZE, .. })
        ));
    }

    #[test]
    fn custom_limits_cannot_exceed_ceilings() {
        assert!(Limits::new(MAX_VECTOR_SIZE + 1, 10).is_err());
        assert!(Limits::new(10, 0).is_err());
        let l = Limits::new(4, 2).unwrap();
        assert!(l.check_vector(4).is_ok());
        assert!(l.check_vector(5).is_err());
        assert!(l.check_matrix(3).is_err());
    }

    #[test]
    fn matrix_rows_obey_vector_ceiling() {
        let l = Limits::new(2, 5).unwrap();
        assert!(l.check_matrix(2).is_ok());
        assert!(matches!(
            l.check_matrix(5),
            Err(TmError::InvalidSize { size: 5, max: 2 })
        ));
    }
}
