//! # Shared Maps
//!
//! A [`SharedMap<K, V>`] is a handle to one mutable hash table. Cloning the
//! handle aliases the table: inserts and deletes through any clone are seen by
//! all of them. An explicit, independent copy is taken with
//! [`SharedMap::snapshot`], which returns a persistent `im::HashMap`.
//!
//! Iteration order is unspecified. [`fmt::Display`] sorts keys so printed
//! forms are stable.
//!
//! ## Example
//!
//! ```
//! use value_lessons_common::SharedMap;
//!
//! let original: SharedMap<String, i32> =
//!     [("A".to_string(), 1), ("B".to_string(), 2)].into_iter().collect();
//! let referred = original.clone();
//!
//! referred.set("C".to_string(), 3);
//! original.delete("A");
//!
//! assert_eq!(original.to_string(), "map[B:2 C:3]");
//! assert_eq!(referred.to_string(), "map[B:2 C:3]");
//! assert_eq!(original.lookup("A"), (0, false));
//! ```
//!
//! `SharedMap` is neither `Send` nor `Sync`; the table carries no lock of its
//! own.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use im::HashMap as ImHashMap;

/// An aliasable handle to a single mutable hash table.
#[derive(Debug)]
pub struct SharedMap<K, V> {
    table: Rc<RefCell<HashMap<K, V>>>,
}

// Aliases the table rather than copying it.
impl<K, V> Clone for SharedMap<K, V> {
    fn clone(&self) -> Self {
        SharedMap {
            table: Rc::clone(&self.table),
        }
    }
}

impl<K, V> Default for SharedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SharedMap<K, V> {
    #[must_use]
    pub fn new() -> Self {
        SharedMap {
            table: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.borrow().is_empty()
    }

    /// Returns true if both handles refer to the same table.
    #[must_use]
    pub fn aliases(&self, other: &SharedMap<K, V>) -> bool {
        Rc::ptr_eq(&self.table, &other.table)
    }
}

impl<K: Eq + Hash, V> SharedMap<K, V> {
    /// Inserts or updates `key`.
    pub fn set(&self, key: K, value: V) {
        self.table.borrow_mut().insert(key, value);
    }

    /// Removes `key`. Deleting an absent key does nothing.
    pub fn delete<Q>(&self, key: &Q)
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.table.borrow_mut().remove(key).is_none() {
            tracing::trace!("delete of absent key ignored");
        }
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.borrow().contains_key(key)
    }
}

impl<K: Eq + Hash, V: Clone + Default> SharedMap<K, V> {
    /// Looks up `key`, returning the value and whether it was present.
    ///
    /// An absent key yields `(V::default(), false)`, which is the only way to
    /// tell it apart from a stored default value.
    #[must_use]
    pub fn lookup<Q>(&self, key: &Q) -> (V, bool)
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.table.borrow().get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    /// Looks up `key`, yielding `V::default()` when absent.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> V
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).0
    }
}

impl<K: Clone, V: Clone> SharedMap<K, V> {
    /// Copies the current entries in unspecified order.
    #[must_use]
    pub fn entries(&self) -> Vec<(K, V)> {
        self.table
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Clone + Eq + Hash, V: Clone> SharedMap<K, V> {
    /// Takes an independent copy of the table.
    ///
    /// Later changes through any handle do not reach the snapshot, and the
    /// snapshot can be updated functionally without touching the table.
    #[must_use]
    pub fn snapshot(&self) -> ImHashMap<K, V> {
        self.table
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for SharedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SharedMap {
            table: Rc::new(RefCell::new(iter.into_iter().collect())),
        }
    }
}

impl<K: Ord + fmt::Display, V: fmt::Display> fmt::Display for SharedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.borrow();
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "map[")?;
        for (i, (k, v)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{k}:{v}")?;
        }
        write!(f, "]")
    }
}
