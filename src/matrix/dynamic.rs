//! Square matrix composed of owned row vectors.
//!
//! `DynamicMatrix<T>` stores its rows as a `DynamicVector<DynamicVector<T>>`
//! and never manages memory on its own. Row access hands out shared
//! `DynamicVector` references or mutable *slices*, so a row can be edited in
//! place but never replaced by one of a different length: the matrix stays
//! square for its whole lifetime.

use std::ops::{Index, IndexMut};

use crate::config::Limits;
use crate::core::traits::{Dimension, Element};
use crate::error::{Result, TmError};
use crate::vector::DynamicVector;

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicMatrix<T> {
    rows: DynamicVector<DynamicVector<T>>,
}

impl<T: Element> DynamicMatrix<T> {
    /// `size` × `size` default elements.
    pub fn new(size: usize) -> Result<Self> {
        Self::filled(size, T::default())
    }

    /// `size` × `size` default elements, checked against custom limits.
    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        limits.check_matrix(size)?;
        Ok(Self::alloc(size, T::default()))
    }

    /// `size` × `size` copies of `value`.
    pub fn filled(size: usize, value: T) -> Result<Self> {
        Limits::default().check_matrix(size)?;
        Ok(Self::alloc(size, value))
    }

    /// Build from row-major nested vectors; every row must have `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        Limits::default().check_matrix(size)?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TmError::InvalidArgument(format!(
                "row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        let rows = rows
            .into_iter()
            .map(|r| DynamicVector::from_boxed(r.into_boxed_slice()))
            .collect();
        Ok(Self::from_row_vector(DynamicVector::from_boxed(rows)))
    }

    fn alloc(size: usize, value: T) -> Self {
        log::trace!("allocating {size}x{size} matrix");
        let rows = (0..size)
            .map(|_| DynamicVector::from_boxed(vec![value.clone(); size].into_boxed_slice()))
            .collect();
        Self::from_row_vector(DynamicVector::from_boxed(rows))
    }
}

impl<T> DynamicMatrix<T> {
    /// Build entry `(i, j)` as `f(i, j)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(size: usize, mut f: F) -> Result<Self> {
        Limits::default().check_matrix(size)?;
        log::trace!("allocating {size}x{size} matrix");
        let rows = (0..size)
            .map(|i| DynamicVector::from_boxed((0..size).map(|j| f(i, j)).collect()))
            .collect();
        Ok(Self::from_row_vector(DynamicVector::from_boxed(rows)))
    }

    pub(crate) fn from_row_vector(rows: DynamicVector<DynamicVector<T>>) -> Self {
        Self { rows }
    }

    /// Rows (== columns); 0 for a moved-from shell.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.rows.is_valid()
    }

    pub(crate) fn ensure_valid(&self) -> Result<()> {
        self.rows.ensure_valid()
    }

    /// Move all rows out, leaving `self` as an invalid shell.
    pub fn take(&mut self) -> Self {
        Self { rows: self.rows.take() }
    }

    /// Exchange contents with `other` without allocating.
    pub fn swap(&mut self, other: &mut Self) {
        self.rows.swap(&mut other.rows);
    }

    /// Checked row access.
    pub fn at(&self, row: usize) -> Result<&DynamicVector<T>> {
        self.rows.at(row)
    }

    /// Checked mutable row access.
    pub fn at_mut(&mut self, row: usize) -> Result<&mut [T]> {
        self.rows.at_mut(row).map(DynamicVector::as_mut_slice)
    }

    /// Checked element access.
    pub fn entry(&self, row: usize, col: usize) -> Result<&T> {
        self.at(row)?.at(col)
    }

    /// Checked mutable element access.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.rows.at_mut(row)?.at_mut(col)
    }

    /// Entry `(row, col)` with no bounds check.
    ///
    /// # Safety
    /// Both `row` and `col` must be less than `self.size()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        unsafe { self.rows.get_unchecked(row).get_unchecked(col) }
    }

    /// Mutable entry `(row, col)` with no bounds check.
    ///
    /// # Safety
    /// Both `row` and `col` must be less than `self.size()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        unsafe { self.rows.get_unchecked_mut(row).get_unchecked_mut(col) }
    }

    /// Row `row` as a mutable slice. Panics when out of range.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        self.rows[row].as_mut_slice()
    }

    pub fn rows(&self) -> std::slice::Iter<'_, DynamicVector<T>> {
        self.rows.iter()
    }

    // Callers must not change row lengths.
    pub(crate) fn rows_mut(&mut self) -> std::slice::IterMut<'_, DynamicVector<T>> {
        self.rows.iter_mut()
    }
}

/// Exchange two matrices in constant time.
pub fn swap<T>(lhs: &mut DynamicMatrix<T>, rhs: &mut DynamicMatrix<T>) {
    lhs.swap(rhs);
}

impl<T: Default> Default for DynamicMatrix<T> {
    /// A 1×1 matrix holding `T::default()`.
    fn default() -> Self {
        let row: Box<[DynamicVector<T>]> = Box::new([DynamicVector::default()]);
        Self::from_row_vector(DynamicVector::from_boxed(row))
    }
}

impl<T> Dimension for DynamicMatrix<T> {
    fn size(&self) -> usize {
        self.rows.size()
    }
}

/// Fast-path row access, so `m[i][j]` reads an element. Panics when out of range.
impl<T> Index<usize> for DynamicMatrix<T> {
    type Output = DynamicVector<T>;

    #[inline]
    fn index(&self, row: usize) -> &DynamicVector<T> {
        &self.rows[row]
    }
}

/// Fast-path element access by `(row, col)`. Panics when out of range.
impl<T> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.rows[i][j]
    }
}
