//! Heap-allocated vector whose length is fixed at construction.
//!
//! `DynamicVector<T>` owns a single `Box<[T]>`. Two accessors exist on purpose:
//! `v[i]` is the fast path where the caller guarantees `i < size`, and
//! `at(i)` reports an out-of-range index as `TmError::IndexOutOfRange`.
//!
//! Rust moves are checked by the compiler, so a moved-from binding cannot be
//! touched at all. `take()` covers the remaining case of moving out of a
//! `&mut` place: the source is left as an empty shell and every fallible
//! method on it returns `TmError::UseAfterMove`.

use std::ops::{Index, IndexMut};

use crate::config::Limits;
use crate::core::traits::{Dimension, Element};
use crate::error::{Result, TmError};

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicVector<T> {
    data: Box<[T]>,
}

impl<T: Element> DynamicVector<T> {
    /// `size` default-constructed elements.
    pub fn new(size: usize) -> Result<Self> {
        Self::filled(size, T::default())
    }

    /// `size` default-constructed elements, checked against custom limits.
    pub fn with_limits(size: usize, limits: &Limits) -> Result<Self> {
        limits.check_vector(size)?;
        Ok(Self::alloc(size, T::default()))
    }

    /// `size` copies of `value`.
    pub fn filled(size: usize, value: T) -> Result<Self> {
        Limits::default().check_vector(size)?;
        Ok(Self::alloc(size, value))
    }

    /// Copy the first `size` elements out of `source`.
    pub fn from_slice(source: &[T], size: usize) -> Result<Self> {
        Limits::default().check_vector(size)?;
        if source.len() < size {
            return Err(TmError::InvalidArgument(format!(
                "source holds {} elements, {} requested",
                source.len(),
                size
            )));
        }
        Ok(Self::from_boxed(source[..size].into()))
    }

    fn alloc(size: usize, value: T) -> Self {
        log::trace!("allocating vector of {size} elements");
        Self::from_boxed(vec![value; size].into_boxed_slice())
    }
}

impl<T> DynamicVector<T> {
    /// Build element `i` as `f(i)`.
    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, f: F) -> Result<Self> {
        Limits::default().check_vector(size)?;
        log::trace!("allocating vector of {size} elements");
        Ok(Self::from_boxed((0..size).map(f).collect()))
    }

    /// Wrap an already validated buffer.
    pub(crate) fn from_boxed(data: Box<[T]>) -> Self {
        Self { data }
    }

    /// Number of elements; 0 for a moved-from shell.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// False once the contents have been moved out by `take()`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    pub(crate) fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() { Ok(()) } else { Err(TmError::UseAfterMove) }
    }

    /// Move the buffer out, leaving `self` as an invalid shell.
    pub fn take(&mut self) -> Self {
        Self { data: std::mem::take(&mut self.data) }
    }

    /// Exchange contents with `other` without allocating.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Checked access.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.ensure_valid()?;
        let size = self.size();
        self.data.get(index).ok_or(TmError::IndexOutOfRange { index, size })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.ensure_valid()?;
        let size = self.size();
        self.data.get_mut(index).ok_or(TmError::IndexOutOfRange { index, size })
    }

    /// Element `index` with no bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.size()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable element `index` with no bounds check.
    ///
    /// # Safety
    /// `index` must be less than `self.size()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(index) }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

/// Exchange two vectors in constant time.
pub fn swap<T>(lhs: &mut DynamicVector<T>, rhs: &mut DynamicVector<T>) {
    lhs.swap(rhs);
}

impl<T: Default> Default for DynamicVector<T> {
    /// A single default element.
    fn default() -> Self {
        let data: Box<[T]> = Box::new([T::default()]);
        Self { data }
    }
}

impl<T> TryFrom<Vec<T>> for DynamicVector<T> {
    type Error = TmError;

    fn try_from(v: Vec<T>) -> Result<Self> {
        Limits::default().check_vector(v.len())?;
        Ok(Self::from_boxed(v.into_boxed_slice()))
    }
}

impl<T: Element> TryFrom<&[T]> for DynamicVector<T> {
    type Error = TmError;

    fn try_from(s: &[T]) -> Result<Self> {
        Self::from_slice(s, s.len())
    }
}

impl<T> Dimension for DynamicVector<T> {
    fn size(&self) -> usize {
        self.data.len()
    }
}

/// Fast-path access. Panics when `index >= size`; use `at` for a reported error.
impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a DynamicVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> AsRef<[T]> for DynamicVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_VECTOR_SIZE;

    #[test]
    fn new_fills_with_default() {
        let v = DynamicVector::<i32>::new(4).unwrap();
        assert_eq!(v.size(), 4);
        assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn rejects_zero_and_oversize() {
        assert!(matches!(DynamicVector::<i32>::new(0), Err(TmError::InvalidSize { .. })));
        assert!(matches!(
            DynamicVector::<u8>::new(MAX_VECTOR_SIZE + 1),
            Err(TmError::InvalidSize { .. })
        ));
        assert!(DynamicVector::<u8>::from_fn(0, |_| 0).is_err());
    }

    #[test]
    fn from_slice_needs_enough_elements() {
        let src = [1, 2, 3];
        let v = DynamicVector::from_slice(&src, 2).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert!(matches!(
            DynamicVector::from_slice(&src, 4),
            Err(TmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn take_leaves_shell() {
        let mut a = DynamicVector::from_fn(3, |i| i as i64).unwrap();
        let b = a.take();
        assert_eq!(b.as_slice(), &[0, 1, 2]);
        assert!(!a.is_valid());
        assert_eq!(a.size(), 0);
        assert!(matches!(a.at(0), Err(TmError::UseAfterMove)));
    }

    #[test]
    fn at_checks_bounds() {
        let mut v = DynamicVector::<f64>::new(2).unwrap();
        *v.at_mut(1).unwrap() = 2.5;
        assert_eq!(*v.at(1).unwrap(), 2.5);
        assert!(matches!(v.at(2), Err(TmError::IndexOutOfRange { index: 2, size: 2 })));
        assert!(matches!(v.at(usize::MAX), Err(TmError::IndexOutOfRange { .. })));
    }

    #[test]
    fn swap_exchanges_sizes() {
        let mut a = DynamicVector::filled(2, 1u8).unwrap();
        let mut b = DynamicVector::filled(5, 9u8).unwrap();
        swap(&mut a, &mut b);
        assert_eq!(a.size(), 5);
        assert_eq!(b.as_slice(), &[1, 1]);
    }

    #[test]
    fn unchecked_access_matches_index() {
        let mut v = DynamicVector::from_fn(4, |i| i * 10).unwrap();
        unsafe {
            *v.get_unchecked_mut(3) = 7;
            assert_eq!(*v.get_unchecked(1), 10);
        }
        assert_eq!(v[3], 7);
        assert_eq!(Dimension::size(&v), 4);
    }

    #[test]
    fn default_is_single_element() {
        let v = DynamicVector::<i32>::default();
        assert_eq!(v.size(), 1);
        assert_eq!(v[0], 0);
    }
}
