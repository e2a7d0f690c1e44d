//! Arithmetic on `DynamicVector`.
//!
//! Scalar operations cannot fail on a valid vector, so they are available both
//! as `std::ops` operators and as `*_scalar` methods (the methods additionally
//! reject moved-from shells). Vector-vector operations can fail with
//! `SizeMismatch` and are methods returning `Result`.

use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use super::DynamicVector;
use crate::core::traits::InnerProduct;
use crate::error::{Result, TmError};

pub(crate) fn check_same_size(left: usize, right: usize) -> Result<()> {
    if left != right {
        log::debug!("size mismatch: {left} vs {right}");
        return Err(TmError::SizeMismatch { left, right });
    }
    Ok(())
}

impl<T> DynamicVector<T> {
    fn map<F: FnMut(&T) -> T>(&self, f: F) -> Self {
        Self::from_boxed(self.iter().map(f).collect())
    }

    fn zip_with<F: FnMut(&T, &T) -> T>(&self, other: &Self, mut f: F) -> Result<Self> {
        self.ensure_valid()?;
        other.ensure_valid()?;
        check_same_size(self.size(), other.size())?;
        Ok(Self::from_boxed(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
        ))
    }
}

impl<T: Clone + Add<Output = T>> DynamicVector<T> {
    /// Add `value` to every element.
    pub fn add_scalar(&self, value: T) -> Result<Self> {
        self.ensure_valid()?;
        Ok(self.map(|x| x.clone() + value.clone()))
    }

    /// Element-wise `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() + b.clone())
    }
}

impl<T: Clone + Sub<Output = T>> DynamicVector<T> {
    /// Subtract `value` from every element.
    pub fn sub_scalar(&self, value: T) -> Result<Self> {
        self.ensure_valid()?;
        Ok(self.map(|x| x.clone() - value.clone()))
    }

    /// Element-wise `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a.clone() - b.clone())
    }
}

impl<T: Clone + Mul<Output = T>> DynamicVector<T> {
    /// Multiply every element by `value`.
    pub fn mul_scalar(&self, value: T) -> Result<Self> {
        self.ensure_valid()?;
        Ok(self.map(|x| x.clone() * value.clone()))
    }
}

impl<T: Clone + Zero + Mul<Output = T>> DynamicVector<T> {
    /// Sum of pairwise products, starting from `T::zero()`.
    pub fn dot(&self, other: &Self) -> Result<T> {
        dot_product(self, other)
    }
}

fn dot_product<T: Clone + Zero + Mul<Output = T>>(
    x: &DynamicVector<T>,
    y: &DynamicVector<T>,
) -> Result<T> {
    x.ensure_valid()?;
    y.ensure_valid()?;
    check_same_size(x.size(), y.size())?;
    Ok(x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
}

impl<T: Clone + Zero + Mul<Output = T>> InnerProduct for DynamicVector<T> {
    type Scalar = T;

    fn dot(&self, rhs: &Self) -> Result<T> {
        dot_product(self, rhs)
    }
}

// Operators cannot report errors: a moved-from shell maps to another shell.
// The `*_scalar` methods reject shells with `UseAfterMove`.
macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Clone + $trait<Output = T>> $trait<T> for &DynamicVector<T> {
            type Output = DynamicVector<T>;

            fn $method(self, value: T) -> DynamicVector<T> {
                self.map(|x| x.clone() $op value.clone())
            }
        }

        impl<T: Clone + $trait<Output = T>> $trait<T> for DynamicVector<T> {
            type Output = DynamicVector<T>;

            fn $method(self, value: T) -> DynamicVector<T> {
                DynamicVector::from_boxed(
                    self.into_vec().into_iter().map(|x| x $op value.clone()).collect(),
                )
            }
        }
    };
}

scalar_op!(Add, add, +);
scalar_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);
