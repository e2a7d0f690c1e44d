//! Arithmetic on `DynamicMatrix`, decomposed into row-vector operations.

use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use super::DynamicMatrix;
use crate::core::traits::MatVec;
use crate::error::Result;
use crate::vector::DynamicVector;
use crate::vector::ops::check_same_size;

impl<T> DynamicMatrix<T> {
    fn zip_rows<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(&DynamicVector<T>, &DynamicVector<T>) -> Result<DynamicVector<T>>,
    {
        self.ensure_valid()?;
        other.ensure_valid()?;
        check_same_size(self.size(), other.size())?;
        let rows = self
            .rows()
            .zip(other.rows())
            .map(|(a, b)| f(a, b))
            .collect::<Result<Box<[_]>>>()?;
        Ok(Self::from_row_vector(DynamicVector::from_boxed(rows)))
    }

    fn map_entries<F: FnMut(&T) -> T>(&self, mut f: F) -> Self {
        let rows = self
            .rows()
            .map(|r| DynamicVector::from_boxed(r.iter().map(&mut f).collect()))
            .collect();
        Self::from_row_vector(DynamicVector::from_boxed(rows))
    }
}

impl<T: Clone + Mul<Output = T>> DynamicMatrix<T> {
    /// Matrix where entry `(i, j)` is `value * self[i][j]`.
    pub fn mul_scalar(&self, value: T) -> Result<Self> {
        self.ensure_valid()?;
        Ok(self.map_entries(|x| value.clone() * x.clone()))
    }
}

impl<T: Clone + Add<Output = T>> DynamicMatrix<T> {
    /// Element-wise `self + other`.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, DynamicVector::try_add)
    }
}

impl<T: Clone + Sub<Output = T>> DynamicMatrix<T> {
    /// Element-wise `self - other`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_rows(other, DynamicVector::try_sub)
    }
}

impl<T: Clone + Zero + Mul<Output = T>> DynamicMatrix<T> {
    /// Row `i` of the result is `self[i] · v`.
    pub fn mul_vector(&self, v: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        self.ensure_valid()?;
        v.ensure_valid()?;
        check_same_size(self.size(), v.size())?;
        let out = self.rows().map(|row| row.dot(v)).collect::<Result<Box<[T]>>>()?;
        Ok(DynamicVector::from_boxed(out))
    }

    /// Standard product: `result[i][j] = Σ_k self[i][k] * other[k][j]`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.ensure_valid()?;
        other.ensure_valid()?;
        let n = self.size();
        check_same_size(n, other.size())?;
        let rows = self
            .rows()
            .map(|a| {
                let row = (0..n)
                    .map(|j| {
                        (0..n).fold(T::zero(), |acc, k| {
                            acc + a[k].clone() * other[k][j].clone()
                        })
                    })
                    .collect();
                DynamicVector::from_boxed(row)
            })
            .collect();
        Ok(Self::from_row_vector(DynamicVector::from_boxed(rows)))
    }
}

/// Matrix–vector product for use in generic code.
impl<T: Clone + Zero + Mul<Output = T>> MatVec<DynamicVector<T>> for DynamicMatrix<T> {
    fn matvec(&self, x: &DynamicVector<T>) -> Result<DynamicVector<T>> {
        self.mul_vector(x)
    }
}

impl<T: Clone + Mul<Output = T>> Mul<T> for &DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(self, value: T) -> DynamicMatrix<T> {
        self.map_entries(|x| value.clone() * x.clone())
    }
}

impl<T: Clone + Mul<Output = T>> Mul<T> for DynamicMatrix<T> {
    type Output = DynamicMatrix<T>;

    fn mul(self, value: T) -> DynamicMatrix<T> {
        &self * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TmError;

    fn m(rows: &[&[i64]]) -> DynamicMatrix<i64> {
        DynamicMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn scalar_multiply_keeps_shape() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = a.mul_scalar(3).unwrap();
        assert_eq!(b, m(&[&[3, 6], &[9, 12]]));
        assert_eq!(&a * 2, m(&[&[2, 4], &[6, 8]]));
    }

    #[test]
    fn add_and_sub_are_ordered() {
        let a = m(&[&[5, 5], &[5, 5]]);
        let b = m(&[&[1, 2], &[3, 4]]);
        assert_eq!(a.try_sub(&b).unwrap(), m(&[&[4, 3], &[2, 1]]));
        assert_eq!(a.try_add(&b).unwrap(), m(&[&[6, 7], &[8, 9]]));
        let c = DynamicMatrix::<i64>::new(3).unwrap();
        assert!(matches!(a.try_add(&c), Err(TmError::SizeMismatch { left: 2, right: 3 })));
        assert!(a.try_sub(&c).is_err());
    }

    #[test]
    fn product_of_three_by_three() {
        let a = m(&[&[1, 2, 4], &[4, 6, 7], &[6, 7, 3]]);
        let b = m(&[&[2, 3, 4], &[3, 4, 5], &[2, 7, 8]]);
        let expected = m(&[&[16, 39, 46], &[40, 85, 102], &[39, 67, 83]]);
        assert_eq!(a.try_mul(&b).unwrap(), expected);
        assert!(a.try_mul(&DynamicMatrix::new(2).unwrap()).is_err());
    }

    #[test]
    fn matrix_times_vector() {
        let a = DynamicMatrix::from_fn(3, |i, j| (i + j) as i64).unwrap();
        let v = DynamicVector::try_from(vec![1i64, 2, 3]).unwrap();
        let y = a.mul_vector(&v).unwrap();
        assert_eq!(y.as_slice(), &[8, 14, 20]);
        assert_eq!(a.matvec(&v).unwrap(), y);
        let short = DynamicVector::try_from(vec![1i64, 2]).unwrap();
        assert!(matches!(a.mul_vector(&short), Err(TmError::SizeMismatch { .. })));
    }
}
