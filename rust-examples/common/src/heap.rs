//! # Arena-Backed Views
//!
//! The same aliasing rules as [`crate::slice::Slice`], expressed with an arena
//! instead of reference counting. A [`Heap<T>`] owns every backing store; a
//! [`HeapSlice<T>`] is a plain `Copy` window naming its store by
//! [`StoreId<T>`]. Copying a window is assignment; it never copies elements.
//!
//! Borrows are checked at compile time through `&Heap` and `&mut Heap`, and a
//! detached window simply names a newer store. `Heap<T>` is `Send + Sync`
//! whenever `T` is, but it has no internal locking: threads that share a heap
//! wrap it in `Arc<Mutex<Heap<T>>>`.
//!
//! ## Example
//!
//! ```
//! use value_lessons_common::heap::Heap;
//!
//! let mut heap = Heap::new();
//! let shared = heap.alloc_from(vec!["p", "q", "r"]);
//! let head = shared.subview(..2);
//! let tail = shared.subview(1..);
//!
//! let head = heap.append(head, ["s"]);
//! assert_eq!(heap.to_vec(shared), ["p", "q", "s"]);
//! assert_eq!(heap.to_vec(tail), ["q", "s"]);
//!
//! let head = heap.append(head, ["t", "u"]);
//! assert_ne!(head.store(), shared.store());
//! assert_eq!(heap.store_count(), 2);
//! ```

use std::marker::PhantomData;
use std::ops::RangeBounds;

use crate::fault::{RangeFault, resolve_range};
use crate::growth::GrowthPolicy;

/// A type-safe index of a backing store inside a [`Heap`].
#[derive(Debug)]
pub struct StoreId<T> {
    index: usize,
    _marker: PhantomData<T>,
}

// Ids compare by index alone, whatever `T` implements.
impl<T> Clone for StoreId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StoreId<T> {}

impl<T> PartialEq for StoreId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for StoreId<T> {}

impl<T> std::hash::Hash for StoreId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T> StoreId<T> {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

/// A window `(store, offset, len, cap)` into a [`Heap`].
#[derive(Debug)]
pub struct HeapSlice<T> {
    store: StoreId<T>,
    offset: usize,
    len: usize,
    cap: usize,
}

impl<T> Clone for HeapSlice<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HeapSlice<T> {}

impl<T> PartialEq for HeapSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && self.offset == other.offset
            && self.len == other.len
            && self.cap == other.cap
    }
}

impl<T> Eq for HeapSlice<T> {}

impl<T> HeapSlice<T> {
    #[must_use]
    pub fn store(self) -> StoreId<T> {
        self.store
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn cap(self) -> usize {
        self.cap
    }

    /// Narrows the window to `range`; capacity becomes `cap - lo`.
    pub fn try_subview<R: RangeBounds<usize>>(self, range: R) -> Result<HeapSlice<T>, RangeFault> {
        let (lo, hi) = resolve_range(&range, self.len)?;
        Ok(HeapSlice {
            store: self.store,
            offset: self.offset + lo,
            len: hi - lo,
            cap: self.cap - lo,
        })
    }

    /// # Panics
    ///
    /// Panics with a [`RangeFault`] on invalid bounds.
    #[track_caller]
    #[must_use]
    pub fn subview<R: RangeBounds<usize>>(self, range: R) -> HeapSlice<T> {
        match self.try_subview(range) {
            Ok(view) => view,
            Err(fault) => fault.raise(),
        }
    }
}

/// Append-only arena of backing stores.
///
/// Stores are never freed: a store abandoned by reallocation stays readable
/// through the windows that still name it.
///
/// A window is only meaningful to the heap that created it. Every method
/// taking a [`HeapSlice`] panics if the window names a store index this heap
/// never allocated (a window from a different heap).
#[derive(Debug)]
pub struct Heap<T> {
    stores: Vec<Vec<T>>,
    growth: GrowthPolicy,
}

impl<T> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Heap<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_growth(GrowthPolicy::default())
    }

    #[must_use]
    pub fn with_growth(growth: GrowthPolicy) -> Self {
        Heap {
            stores: Vec::new(),
            growth,
        }
    }

    /// Number of stores ever allocated.
    #[must_use]
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    fn alloc(&mut self, store: Vec<T>) -> StoreId<T> {
        let index = self.stores.len();
        self.stores.push(store);
        StoreId {
            index,
            _marker: PhantomData,
        }
    }

    /// Moves `values` into a new store; the window covers all of it.
    pub fn alloc_from(&mut self, values: Vec<T>) -> HeapSlice<T> {
        let len = values.len();
        HeapSlice {
            store: self.alloc(values),
            offset: 0,
            len,
            cap: len,
        }
    }

    pub fn try_get(&self, view: HeapSlice<T>, index: usize) -> Result<&T, RangeFault> {
        RangeFault::check_index(index, view.len)?;
        Ok(&self.stores[view.store.index][view.offset + index])
    }

    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if `index >= view.len()`, and panics if
    /// `view` is from a different heap.
    #[track_caller]
    #[must_use]
    pub fn get(&self, view: HeapSlice<T>, index: usize) -> &T {
        match self.try_get(view, index) {
            Ok(value) => value,
            Err(fault) => fault.raise(),
        }
    }

    pub fn try_set(&mut self, view: HeapSlice<T>, index: usize, value: T) -> Result<(), RangeFault> {
        RangeFault::check_index(index, view.len)?;
        self.stores[view.store.index][view.offset + index] = value;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics with a [`RangeFault`] if `index >= view.len()`, and panics if
    /// `view` is from a different heap.
    #[track_caller]
    pub fn set(&mut self, view: HeapSlice<T>, index: usize, value: T) {
        if let Err(fault) = self.try_set(view, index, value) {
            fault.raise();
        }
    }

    /// # Panics
    ///
    /// Panics if `view` is from a different heap.
    pub fn iter(&self, view: HeapSlice<T>) -> impl Iterator<Item = &T> {
        self.stores[view.store.index][view.offset..view.offset + view.len].iter()
    }
}

impl<T: Clone> Heap<T> {
    #[must_use]
    pub fn to_vec(&self, view: HeapSlice<T>) -> Vec<T> {
        self.iter(view).cloned().collect()
    }
}

impl<T: Clone + Default> Heap<T> {
    /// Allocates a store of `cap` default values; the window covers `len`.
    ///
    /// # Panics
    ///
    /// Panics with [`RangeFault::Capacity`] if `len > cap`.
    #[track_caller]
    pub fn make(&mut self, len: usize, cap: usize) -> HeapSlice<T> {
        if len > cap {
            RangeFault::Capacity { len, cap }.raise();
        }
        HeapSlice {
            store: self.alloc(vec![T::default(); cap]),
            offset: 0,
            len,
            cap,
        }
    }

    /// Appends `values` to `view`.
    ///
    /// Within capacity the values land in `view`'s store and the returned
    /// window names the same store. Past capacity a new store is allocated
    /// and the returned window names it instead.
    ///
    /// # Panics
    ///
    /// Panics if `view` is from a different heap.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, view: HeapSlice<T>, values: I) -> HeapSlice<T> {
        let values: Vec<T> = values.into_iter().collect();
        let required = view.len + values.len();

        if required <= view.cap {
            let start = view.offset + view.len;
            let store = &mut self.stores[view.store.index];
            for (slot, value) in store[start..start + values.len()].iter_mut().zip(values) {
                *slot = value;
            }
            return HeapSlice {
                len: required,
                ..view
            };
        }

        let cap = self.growth.next_capacity(view.cap, required);
        let mut fresh = Vec::with_capacity(cap);
        fresh.extend(self.iter(view).cloned());
        fresh.extend(values);
        fresh.resize(cap, T::default());
        tracing::debug!(
            from = view.store.index,
            old_cap = view.cap,
            new_cap = cap,
            "append exceeded capacity, allocating store in heap"
        );

        HeapSlice {
            store: self.alloc(fresh),
            offset: 0,
            len: required,
            cap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn test_copy_of_window_aliases() {
        let mut heap = Heap::new();
        let original = heap.alloc_from(vec![1, 2, 3]);
        let copied = original;

        heap.set(copied, 0, 9);

        assert_eq!(heap.to_vec(original), vec![9, 2, 3]);
        assert_eq!(original, copied);
    }

    #[test]
    fn test_append_in_place_then_detach() {
        let mut heap: Heap<i32> = Heap::new();
        let v = heap.make(0, 2);
        let a = heap.append(v, [1, 2]);
        assert_eq!(a.store(), v.store());

        let b = heap.append(a, [3]);
        assert_ne!(b.store(), a.store());
        heap.set(b, 0, 100);

        assert_eq!(heap.to_vec(a), vec![1, 2]);
        assert_eq!(heap.to_vec(b), vec![100, 2, 3]);
        assert_eq!(b.cap(), 4);
    }

    #[test]
    fn test_subview_faults() {
        let mut heap: Heap<u8> = Heap::new();
        let v = heap.make(3, 3);
        assert_eq!(
            v.try_subview(1..5),
            Err(RangeFault::Bounds { hi: 5, len: 3 })
        );
        assert_eq!(v.subview(1..).cap(), 2);
    }

    #[test]
    #[should_panic(expected = "index out of range [2] with length 2")]
    fn test_get_past_len_panics() {
        let mut heap: Heap<u8> = Heap::new();
        let v = heap.make(2, 4);
        let _ = heap.get(v, 2);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_view_from_other_heap_panics() {
        let mut other: Heap<u8> = Heap::new();
        other.make(1, 1);
        let foreign = other.make(1, 1);

        let heap: Heap<u8> = Heap::new();
        let _ = heap.to_vec(foreign);
    }

    #[test]
    fn test_shared_heap_behind_mutex() {
        let heap = Arc::new(Mutex::new(Heap::<u64>::new()));
        let view = heap.lock().expect("heap lock").make(4, 4);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let heap = Arc::clone(&heap);
                thread::spawn(move || {
                    heap.lock().expect("heap lock").set(view, i, i as u64 * 10);
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let heap = heap.lock().expect("heap lock");
        assert_eq!(heap.to_vec(view), vec![0, 10, 20, 30]);
    }
}
