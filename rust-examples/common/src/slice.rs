//! # Growable Sequence Views
//!
//! A [`Slice<T>`] is a window `(offset, len, cap)` over a backing store that
//! other slices may share. Cloning a slice copies the window, never the store,
//! so every clone observes element writes made through any other.
//!
//! ```text
//!            store (shared, Rc<RefCell<Vec<T>>>)
//!   ┌─────┬─────┬─────┬─────┬─────┐
//!   │  p  │  q  │  r  │     │     │
//!   └─────┴─────┴─────┴─────┴─────┘
//!   ▲───────────▲ s[..2]   offset 0, len 2, cap 5
//!         ▲─────────────────────▲ s[1..]  offset 1, len 2, cap 4
//! ```
//!
//! Appending writes into the store while the window has spare capacity, which
//! is visible to any overlapping slice. Once capacity runs out, `append`
//! copies the window into a fresh store sized by the slice's
//! [`GrowthPolicy`] and the result no longer aliases anything.
//!
//! ## Example
//!
//! ```
//! use value_lessons_common::Slice;
//!
//! let shared = Slice::from(vec!["p", "q", "r"]);
//! let head = shared.subview(..2);
//! let tail = shared.subview(1..);
//!
//! let head = head.append(["s"]);
//! assert_eq!(shared.to_vec(), ["p", "q", "s"]);
//! assert_eq!(tail.to_vec(), ["q", "s"]);
//!
//! let head = head.append(["t", "u"]);
//! assert_eq!(head.to_vec(), ["p", "q", "s", "t", "u"]);
//! assert!(!head.shares_store_with(&shared));
//! ```
//!
//! ## Threads
//!
//! `Slice<T>` is neither `Send` nor `Sync`. The store has no internal
//! locking; sharing one across threads needs an external lock around an
//! arena-backed store such as [`crate::heap::Heap`].

use std::cell::RefCell;
use std::fmt;
use std::ops::RangeBounds;
use std::rc::Rc;

use crate::fault::{RangeFault, resolve_range};
use crate::growth::GrowthPolicy;

/// An aliasable window over a shared, growable backing store.
#[derive(Debug)]
pub struct Slice<T> {
    store: Rc<RefCell<Vec<T>>>,
    offset: usize,
    len: usize,
    cap: usize,
    growth: GrowthPolicy,
}

// Copies the window only; the store stays shared.
impl<T> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Slice {
            store: Rc::clone(&self.store),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
            growth: self.growth,
        }
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Slice<T> {
    /// Creates an empty slice with no capacity.
    #[must_use]
    pub fn new() -> Self {
        Slice {
            store: Rc::new(RefCell::new(Vec::new())),
            offset: 0,
            len: 0,
            cap: 0,
            growth: GrowthPolicy::default(),
        }
    }

    /// Returns the same window with a different growth policy.
    #[must_use]
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Room between the window's start and the end of its store.
    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Returns true if both slices are windows over the same store.
    #[must_use]
    pub fn shares_store_with(&self, other: &Slice<T>) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Writes `value` at `index`, visible through every overlapping slice.
    pub fn try_set(&self, index: usize, value: T) -> Result<(), RangeFault> {
        RangeFault::check_index(index, self.len)?;
        self.store.borrow_mut()[self.offset + index] = value;
        Ok(())
    }

    /// Writes `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if `index >= len`.
    #[track_caller]
    pub fn set(&self, index: usize, value: T) {
        if let Err(fault) = self.try_set(index, value) {
            fault.raise();
        }
    }

    /// Narrows the window to `range`, sharing the store.
    ///
    /// The new window starts at `offset + lo` and keeps every slot up to the
    /// end of the store as capacity: `cap - lo`.
    pub fn try_subview<R: RangeBounds<usize>>(&self, range: R) -> Result<Slice<T>, RangeFault> {
        let (lo, hi) = resolve_range(&range, self.len)?;
        Ok(Slice {
            store: Rc::clone(&self.store),
            offset: self.offset + lo,
            len: hi - lo,
            cap: self.cap - lo,
            growth: self.growth,
        })
    }

    /// Narrows the window to `range`.
    ///
    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if the low bound is past the high bound or
    /// the high bound is past `len`.
    #[track_caller]
    #[must_use]
    pub fn subview<R: RangeBounds<usize>>(&self, range: R) -> Slice<T> {
        match self.try_subview(range) {
            Ok(view) => view,
            Err(fault) => fault.raise(),
        }
    }
}

impl<T: Clone> Slice<T> {
    /// Reads the element at `index`.
    pub fn try_get(&self, index: usize) -> Result<T, RangeFault> {
        RangeFault::check_index(index, self.len)?;
        Ok(self.store.borrow()[self.offset + index].clone())
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if `index >= len`.
    #[track_caller]
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        match self.try_get(index) {
            Ok(value) => value,
            Err(fault) => fault.raise(),
        }
    }

    /// Copies the elements currently in the window.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.store.borrow()[self.offset..self.offset + self.len].to_vec()
    }

    /// Iterates over a snapshot of the window taken at call time.
    pub fn iter(&self) -> impl Iterator<Item = T> + use<T> {
        self.to_vec().into_iter()
    }
}

impl<T: Clone + Default> Slice<T> {
    /// Allocates a store of `cap` default values and returns a window over
    /// its first `len` slots.
    ///
    /// # Panics
    ///
    /// Panics with [`RangeFault::Capacity`] if `len > cap`.
    #[track_caller]
    #[must_use]
    pub fn make(len: usize, cap: usize) -> Self {
        if len > cap {
            RangeFault::Capacity { len, cap }.raise();
        }
        Slice {
            store: Rc::new(RefCell::new(vec![T::default(); cap])),
            offset: 0,
            len,
            cap,
            growth: GrowthPolicy::default(),
        }
    }

    /// Appends `values`, returning the grown window.
    ///
    /// If the window's spare capacity holds every value, they are written into
    /// the shared store starting at `offset + len` and the result aliases the
    /// same store. Otherwise a new store is allocated, the window and the
    /// values are copied into it, and the result is independent of `self` and
    /// every other alias.
    #[must_use]
    pub fn append<I: IntoIterator<Item = T>>(&self, values: I) -> Slice<T> {
        let values: Vec<T> = values.into_iter().collect();
        let required = self.len + values.len();

        if required <= self.cap {
            let start = self.offset + self.len;
            {
                let mut store = self.store.borrow_mut();
                for (slot, value) in store[start..start + values.len()].iter_mut().zip(values) {
                    *slot = value;
                }
            }
            tracing::trace!(len = required, cap = self.cap, "append within capacity");
            return Slice {
                store: Rc::clone(&self.store),
                offset: self.offset,
                len: required,
                cap: self.cap,
                growth: self.growth,
            };
        }

        let cap = self.growth.next_capacity(self.cap, required);
        let mut fresh = Vec::with_capacity(cap);
        fresh.extend(self.to_vec());
        fresh.extend(values);
        fresh.resize(cap, T::default());
        tracing::debug!(
            old_cap = self.cap,
            new_cap = cap,
            len = required,
            "append exceeded capacity, reallocating store"
        );

        Slice {
            store: Rc::new(RefCell::new(fresh)),
            offset: 0,
            len: required,
            cap,
            growth: self.growth,
        }
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Slice {
            store: Rc::new(RefCell::new(values)),
            offset: 0,
            len,
            cap: len,
            growth: GrowthPolicy::default(),
        }
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Slice::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: fmt::Display> fmt::Display for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        write!(f, "[")?;
        for (i, value) in store[self.offset..self.offset + self.len].iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
