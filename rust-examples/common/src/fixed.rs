//! # Fixed Sequences
//!
//! [`FixedSeq<T, N>`] holds exactly `N` elements; `N` is part of the type.
//! It is a value: cloning copies all `N` elements, and a copy never observes
//! writes to the original.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::fault::RangeFault;
use crate::value_type::ValueType;

/// An ordered sequence of exactly `N` elements, copied by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedSeq<T, const N: usize>([T; N]);

impl<T: Default, const N: usize> Default for FixedSeq<T, N> {
    fn default() -> Self {
        FixedSeq(std::array::from_fn(|_| T::default()))
    }
}

impl<T: Clone + Default, const N: usize> ValueType for FixedSeq<T, N> {}

impl<T, const N: usize> From<[T; N]> for FixedSeq<T, N> {
    fn from(elements: [T; N]) -> Self {
        FixedSeq(elements)
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// Number of elements, fixed by the type.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn try_get(&self, index: usize) -> Result<&T, RangeFault> {
        RangeFault::check_index(index, N)?;
        Ok(&self.0[index])
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), RangeFault> {
        RangeFault::check_index(index, N)?;
        self.0[index] = value;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if `index >= N`.
    #[track_caller]
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self[index]
    }

    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if `index >= N`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        if let Err(fault) = self.try_set(index, value) {
            fault.raise();
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[must_use]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.0.last()
    }
}

impl<T, const N: usize> Index<usize> for FixedSeq<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(value) => value,
            Err(fault) => fault.raise(),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSeq<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if let Err(fault) = RangeFault::check_index(index, N) {
            fault.raise();
        }
        &mut self.0[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSeq<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedSeq<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
