//! Day 10: Structs
//!
//! Records group named fields. Assigning a record, or passing it to a
//! function, copies it whole, nested records included.

use value_lessons_common::{ValueType, with_copy};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl ValueType for Address {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub address: Address,
}

impl ValueType for User {}

impl User {
    /// Moves the user to a new zip code in place.
    pub fn relocate(&mut self, zip_code: impl Into<String>) {
        self.address.zip_code = zip_code.into();
    }

    /// Retires the account under a new email address.
    pub fn deactivate(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.is_active = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl ValueType for Product {}

#[must_use]
pub fn alice() -> User {
    User {
        id: 1,
        name: "Alice Wonderland".to_string(),
        email: "alice@example.com".to_string(),
        is_active: true,
        address: Address {
            street: "123 Main St".to_string(),
            city: "Wonderland".to_string(),
            zip_code: "90210".to_string(),
            country: "Fantasy".to_string(),
        },
    }
}

#[must_use]
pub fn laptop() -> Product {
    Product {
        name: "Laptop".to_string(),
        price: 1200.0,
        stock: 5,
    }
}

/// A record type declared inside the one function that uses it.
#[must_use]
pub fn temporary_gadget() -> String {
    #[derive(Debug)]
    struct Gadget {
        name: &'static str,
        price: f64,
    }

    let gadget = Gadget {
        name: "Temporary Gadget",
        price: 99.99,
    };
    format!("{gadget:?}")
}

/// Describes `product` and clears its stock. The product arrives by value,
/// so the cleared stock is the routine's own.
#[must_use]
pub fn describe_and_clear(mut product: Product) -> (String, u32) {
    let line = format!("{}, {:.2}", product.name, product.price);
    product.stock = 0;
    (line, product.stock)
}

/// Runs [`describe_and_clear`] on a copy of `product`.
#[must_use]
pub fn discard_stock(product: &Product) -> (String, u32) {
    with_copy(product, describe_and_clear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value_user() {
        let user = User::zeroed();
        assert_eq!(user.id, 0);
        assert!(user.name.is_empty());
        assert!(!user.is_active);
        assert_eq!(user.address, Address::default());
    }

    #[test]
    fn test_modify_fields() {
        let mut user = alice();
        user.deactivate("alice.new@example.com");
        user.relocate("90211");

        assert_eq!(user.email, "alice.new@example.com");
        assert!(!user.is_active);
        assert_eq!(user.address.zip_code, "90211");
        assert_eq!(user.address.city, "Wonderland");
    }

    #[test]
    fn test_copy_includes_nested_address() {
        let original = alice();
        let mut moved = original.copy();
        moved.relocate("10001");

        assert_eq!(original.address.zip_code, "90210");
        assert_eq!(moved.address.zip_code, "10001");
    }

    #[test]
    fn test_assignment_copies_product() {
        let product1 = laptop();
        let mut product2 = product1.copy();
        product2.stock = 3;
        product2.name = "Desktop".to_string();

        assert_eq!(product1, laptop());
        assert_eq!(product2.name, "Desktop");
        assert_eq!(product2.stock, 3);
    }

    #[test]
    fn test_local_record() {
        assert_eq!(
            temporary_gadget(),
            "Gadget { name: \"Temporary Gadget\", price: 99.99 }"
        );
    }

    #[test]
    fn test_pass_by_value_leaves_caller_unchanged() {
        let product = laptop();
        let (line, stock_inside) = discard_stock(&product);

        assert_eq!(line, "Laptop, 1200.00");
        assert_eq!(stock_inside, 0);
        assert_eq!(product.stock, 5);
    }
}
