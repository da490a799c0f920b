//! Day 8: Slices
//!
//! A slice is a window onto a shared store. Passing or assigning one copies
//! the window only, so writes are visible to every holder. Appending shares
//! the store while there is spare capacity and moves to a new one once there
//! is not.

use value_lessons_common::Slice;

pub const TASKS: [&str; 6] = [
    "Learn Go slices",
    "Practice slice operations",
    "Understand underlying arrays",
    "Review slice examples",
    "Experiment with append",
    "Prepare for Day 9",
];

/// Length and capacity of a slice at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub len: usize,
    pub cap: usize,
}

impl<T> From<&Slice<T>> for Shape {
    fn from(slice: &Slice<T>) -> Self {
        Shape {
            len: slice.len(),
            cap: slice.cap(),
        }
    }
}

/// Builds the to-do list one append at a time from an empty slice with room
/// for five, recording the shape after every append.
#[must_use]
pub fn build_todo_list() -> (Slice<String>, Vec<Shape>) {
    let mut list: Slice<String> = Slice::make(0, 5);
    let mut shapes = Vec::with_capacity(TASKS.len());
    for task in TASKS {
        list = list.append([task.to_string()]);
        shapes.push(Shape::from(&list));
    }
    (list, shapes)
}

/// Overwrites the first element. `list` arrives by value, yet the caller
/// sees the write because only the window was copied.
pub fn mark_first(list: Slice<&'static str>, mark: &'static str) {
    if !list.is_empty() {
        list.set(0, mark);
    }
}

/// Contents of the three slices in the shared-list walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedListStep {
    pub shared: Vec<&'static str>,
    pub sub_list_1: Vec<&'static str>,
    pub sub_list_2: Vec<&'static str>,
}

/// Two windows onto `["p", "q", "r"]`, then appends to the first:
///
/// 1. Appending `"s"` fits in the store, overwriting `"r"` for everyone.
/// 2. Appending `"t", "u"` does not fit; the first window moves to a new
///    store and the other two keep seeing the old one.
#[must_use]
pub fn shared_list_scenario() -> [SharedListStep; 2] {
    let shared = Slice::from(vec!["p", "q", "r"]);
    let sub_list_1 = shared.subview(..2);
    let sub_list_2 = shared.subview(1..);

    let sub_list_1 = sub_list_1.append(["s"]);
    let after_fit = SharedListStep {
        shared: shared.to_vec(),
        sub_list_1: sub_list_1.to_vec(),
        sub_list_2: sub_list_2.to_vec(),
    };

    let sub_list_1 = sub_list_1.append(["t", "u"]);
    let after_growth = SharedListStep {
        shared: shared.to_vec(),
        sub_list_1: sub_list_1.to_vec(),
        sub_list_2: sub_list_2.to_vec(),
    };

    [after_fit, after_growth]
}
