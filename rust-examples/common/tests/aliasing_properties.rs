//! Property-based tests for copy and aliasing behaviour.
//!
//! Values must never observe writes to their copies; views and maps must
//! observe writes through every alias until an append outgrows capacity.

use proptest::prelude::*;
use value_lessons_common::{FixedSeq, GrowthPolicy, Heap, SharedMap, Slice};

fn policy() -> impl Strategy<Value = GrowthPolicy> {
    prop_oneof![
        Just(GrowthPolicy::default()),
        Just(GrowthPolicy::Doubling),
        Just(GrowthPolicy::Exact),
        (1usize..512).prop_map(|threshold| GrowthPolicy::Amortized { threshold }),
    ]
}

proptest! {
    // ========================================================================
    // Value types
    // ========================================================================

    /// Writing to a copied fixed sequence never reaches the original
    #[test]
    fn fixed_copy_is_independent(values: [i64; 8], index in 0usize..8, replacement: i64) {
        let original = FixedSeq::from(values);
        let mut copied = original;
        copied[index] = replacement;

        prop_assert_eq!(original.as_array(), &values);
        prop_assert_eq!(copied[index], replacement);
    }

    // ========================================================================
    // Slices
    // ========================================================================

    /// An append that fits is visible through a view covering the written slot
    #[test]
    fn append_within_capacity_is_shared(
        values in prop::collection::vec(any::<i32>(), 1..32),
        split in 0usize..32,
        appended: i32,
    ) {
        let split = split % values.len();
        let whole = Slice::from(values.clone());
        let head = whole.subview(..split);

        let head = head.append([appended]);

        prop_assert!(head.shares_store_with(&whole));
        prop_assert_eq!(whole.get(split), appended);
        prop_assert_eq!(head.to_vec(), whole.to_vec()[..=split].to_vec());
    }

    /// An append that does not fit detaches from every earlier alias
    #[test]
    fn append_beyond_capacity_detaches(
        values in prop::collection::vec(any::<i32>(), 0..32),
        extra in prop::collection::vec(any::<i32>(), 1..8),
        growth in policy(),
    ) {
        let original = Slice::from(values.clone()).with_growth(growth);
        let alias = original.clone();
        let grown = original.append(extra.clone());

        for i in 0..grown.len() {
            grown.set(i, i32::MIN);
        }

        prop_assert!(!grown.shares_store_with(&original));
        prop_assert_eq!(original.to_vec(), values.clone());
        prop_assert_eq!(alias.to_vec(), values);
        prop_assert!(grown.cap() >= grown.len());
    }

    /// Sub-views keep every slot to the end of the store as capacity
    #[test]
    fn subview_capacity_runs_to_store_end(len in 0usize..16, spare in 0usize..16, lo in 0usize..16) {
        let view: Slice<u8> = Slice::make(len, len + spare);
        let lo = lo.min(len);
        let sub = view.subview(lo..);

        prop_assert_eq!(sub.len(), len - lo);
        prop_assert_eq!(sub.cap(), len + spare - lo);
    }

    // ========================================================================
    // Arena-backed views
    // ========================================================================

    /// The arena representation follows the same detach rule
    #[test]
    fn heap_append_matches_slice(
        values in prop::collection::vec(any::<u16>(), 0..16),
        spare in 0usize..4,
        extra in prop::collection::vec(any::<u16>(), 0..8),
    ) {
        let mut heap: Heap<u16> = Heap::new();
        let view = heap.make(0, values.len() + spare);
        let view = heap.append(view, values.clone());
        let grown = heap.append(view, extra.clone());

        let rc_view = Slice::<u16>::make(0, values.len() + spare).append(values.clone());
        let rc_grown = rc_view.append(extra.clone());

        prop_assert_eq!(heap.to_vec(grown), rc_grown.to_vec());
        prop_assert_eq!(grown.cap(), rc_grown.cap());
        prop_assert_eq!(grown.store() == view.store(), rc_grown.shares_store_with(&rc_view));
    }

    // ========================================================================
    // Maps
    // ========================================================================

    /// A set through one handle is found through every handle
    #[test]
    fn map_set_visible_through_aliases(
        entries in prop::collection::hash_map("[a-z]{1,4}", any::<i32>(), 0..16),
        key in "[A-Z]{1,4}",
        value: i32,
    ) {
        let original: SharedMap<String, i32> = entries.into_iter().collect();
        let alias = original.clone();

        prop_assert_eq!(original.lookup(key.as_str()), (0, false));
        alias.set(key.clone(), value);

        prop_assert_eq!(original.lookup(key.as_str()), (value, true));
        prop_assert_eq!(alias.lookup(key.as_str()), (value, true));
    }

    /// Growth never produces a store too small for the request
    #[test]
    fn growth_covers_request(old_cap in 0usize..4096, extra in 1usize..4096, growth in policy()) {
        let required = old_cap + extra;
        prop_assert!(growth.next_capacity(old_cap, required) >= required);
    }
}
