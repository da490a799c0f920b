//! # Value Lessons Common
//!
//! The composite value semantics model shared by the lessons: how records,
//! fixed sequences, growable sequences and maps behave under assignment,
//! copying and partial mutation.
//!
//! ## Modules
//!
//! - [`value_type`]: records and explicit by-value copies
//! - [`fixed`]: fixed-length sequences copied by value
//! - [`slice`]: aliasable views over a reference-counted growable store
//! - [`heap`]: the same views over an arena of stores, addressed by index
//! - [`map`]: aliasable handles to one mutable hash table
//! - [`growth`]: capacity policy for reallocated stores
//! - [`scope`]: persistent block scopes for declarations
//! - [`fault`]: range faults and explicit domain errors
//!
//! ## Rules
//!
//! 1. **Values copy**: [`ValueType`]s and [`FixedSeq`]s never share storage
//!    with their copies.
//! 2. **Views alias**: cloning a [`Slice`] or copying a [`heap::HeapSlice`]
//!    shares the store until an append outgrows its capacity.
//! 3. **Maps alias**: cloning a [`SharedMap`] shares the table; take a
//!    [`SharedMap::snapshot`] for an independent copy.
//! 4. **Range faults are fatal**: out-of-range access panics; `try_*` forms
//!    return the [`RangeFault`] instead.

pub mod fault;
pub mod fixed;
pub mod growth;
pub mod heap;
pub mod map;
pub mod scope;
pub mod slice;
pub mod value_type;

// Re-export main types for convenience
pub use fault::{DomainError, RangeFault};
pub use fixed::FixedSeq;
pub use growth::GrowthPolicy;
pub use heap::{Heap, HeapSlice, StoreId};
pub use map::SharedMap;
pub use scope::{Scope, ScopeError};
pub use slice::Slice;
pub use value_type::{ValueType, with_copy};
