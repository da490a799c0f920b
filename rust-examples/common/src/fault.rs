//! # Faults
//!
//! Two kinds of failure show up when working with composite values:
//!
//! - [`RangeFault`]: an index or slicing bound was violated. These are
//!   unrecoverable. The plain accessors (`get`, `set`, `subview`, indexing)
//!   panic with the fault's message; the `try_*` forms hand the fault back so
//!   tests and callers that validate input can inspect it.
//! - [`DomainError`]: an operation that can legitimately fail for some inputs
//!   (dividing by zero) and reports it as an explicit `Result` the caller must
//!   check.

use std::ops::{Bound, RangeBounds};

/// A violated index or slicing bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeFault {
    /// Element access outside `[0, len)`.
    #[error("index out of range [{index}] with length {len}")]
    Index { index: usize, len: usize },

    /// A sub-view whose low bound is past its high bound.
    #[error("slice bounds out of range [{lo}:{hi}]")]
    Inverted { lo: usize, hi: usize },

    /// A sub-view whose high bound is past the view's length.
    #[error("slice bounds out of range [:{hi}] with length {len}")]
    Bounds { hi: usize, len: usize },

    /// A view requested with more elements than its store can hold.
    #[error("len {len} out of range for capacity {cap}")]
    Capacity { len: usize, cap: usize },
}

impl RangeFault {
    /// Checks `index` against `len`.
    pub fn check_index(index: usize, len: usize) -> Result<(), RangeFault> {
        if index < len {
            Ok(())
        } else {
            Err(RangeFault::Index { index, len })
        }
    }

    /// Aborts the current operation. Range faults are not handled locally.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}

/// An explicit, checkable failure of a domain operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("cannot divide by zero")]
    DivideByZero,
}

/// Resolves a range expression against a view of length `len` into `(lo, hi)`.
///
/// `..` maps to `(0, len)`; inclusive ends are converted to exclusive ones.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(
    range: &R,
    len: usize,
) -> Result<(usize, usize), RangeFault> {
    let lo = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let hi = match range.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };

    if hi > len {
        return Err(RangeFault::Bounds { hi, len });
    }
    if lo > hi {
        return Err(RangeFault::Inverted { lo, hi });
    }
    Ok((lo, hi))
}
