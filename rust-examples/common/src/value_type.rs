//! # Value Types
//!
//! Records (structs) and fixed sequences are values: assigning one produces
//! independent storage, recursively through nested value fields. In Rust that
//! is an explicit `clone`. [`ValueType`] names the two operations lessons rely
//! on, the zero value and the copy, and is only implemented for types whose
//! clone shares nothing with the original.
//!
//! ## Example
//!
//! ```
//! use value_lessons_common::{ValueType, with_copy};
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Product {
//!     name: String,
//!     stock: u32,
//! }
//!
//! impl ValueType for Product {}
//!
//! let laptop = Product { name: "Laptop".into(), stock: 5 };
//! let mut desktop = laptop.copy();
//! desktop.name = "Desktop".into();
//!
//! let stock_inside = with_copy(&laptop, |mut p| {
//!     p.stock = 0;
//!     p.stock
//! });
//!
//! assert_eq!(stock_inside, 0);
//! assert_eq!(laptop, Product { name: "Laptop".into(), stock: 5 });
//! assert_eq!(Product::zeroed(), Product::default());
//! ```

/// A type copied by value on assignment.
///
/// Implementors must not hold shared handles (`Rc`, [`crate::Slice`],
/// [`crate::SharedMap`]) unless aliasing through them is intended.
pub trait ValueType: Clone + Default {
    /// Every field set to its type's default.
    #[must_use]
    fn zeroed() -> Self {
        Self::default()
    }

    /// An independent copy.
    #[must_use]
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// Hands `routine` its own copy of `value`, the way a by-value parameter
/// would. Whatever the routine does to its copy stays inside it.
pub fn with_copy<T: ValueType, R>(value: &T, routine: impl FnOnce(T) -> R) -> R {
    routine(value.copy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Inner {
        zip: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Outer {
        id: u32,
        inner: Inner,
    }

    impl ValueType for Outer {}

    #[test]
    fn test_copy_is_deep_through_nested_records() {
        let original = Outer {
            id: 1,
            inner: Inner {
                zip: "90210".into(),
            },
        };
        let mut copied = original.copy();
        copied.inner.zip = "90211".into();

        assert_eq!(original.inner.zip, "90210");
        assert_eq!(copied.inner.zip, "90211");
    }

    #[test]
    fn test_with_copy_leaves_caller_unchanged() {
        let original = Outer::zeroed();
        let seen = with_copy(&original, |mut o| {
            o.id = 7;
            o.id
        });
        assert_eq!(seen, 7);
        assert_eq!(original.id, 0);
    }
}
