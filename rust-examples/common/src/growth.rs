//! # Growth Policy
//!
//! When an append does not fit in a view's remaining capacity, a new backing
//! store is allocated. [`GrowthPolicy`] decides how large that store is.
//!
//! The policy is plain configuration: it derives `serde` traits so a lesson
//! runner can read it from a TOML table such as
//!
//! ```toml
//! strategy = "amortized"
//! threshold = 256
//! ```

use serde::{Deserialize, Serialize};

/// Default size at which [`GrowthPolicy::Amortized`] stops doubling.
pub const DEFAULT_THRESHOLD: usize = 256;

/// Rule for sizing a reallocated backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Double small stores; past `threshold`, grow by a quarter plus a
    /// constant until the request fits. Requests larger than double the old
    /// capacity get exactly what they asked for.
    Amortized { threshold: usize },
    /// Double the old capacity, or jump straight to the requested length.
    Doubling,
    /// Allocate exactly the requested length.
    Exact,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Amortized {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl GrowthPolicy {
    /// Returns the capacity of a new store replacing one of `old_cap` that
    /// must hold at least `required` elements.
    ///
    /// The result is always `>= required`.
    ///
    /// # Example
    ///
    /// ```
    /// use value_lessons_common::GrowthPolicy;
    ///
    /// let policy = GrowthPolicy::default();
    /// assert_eq!(policy.next_capacity(3, 5), 6);
    /// assert_eq!(policy.next_capacity(3, 7), 7);
    /// assert_eq!(GrowthPolicy::Exact.next_capacity(3, 5), 5);
    /// ```
    #[must_use]
    pub fn next_capacity(self, old_cap: usize, required: usize) -> usize {
        match self {
            GrowthPolicy::Exact => required,
            GrowthPolicy::Doubling => old_cap.saturating_mul(2).max(required),
            GrowthPolicy::Amortized { threshold } => {
                let double = old_cap.saturating_mul(2);
                if required > double {
                    return required;
                }
                if old_cap < threshold {
                    return double;
                }
                let mut cap = old_cap;
                while cap < required {
                    let step = (cap.saturating_add(threshold.saturating_mul(3)) / 4).max(1);
                    cap = cap.saturating_add(step);
                }
                cap
            }
        }
    }
}
