//! Day 9: Maps
//!
//! A simple inventory keyed by item name. Every handle to the inventory
//! refers to the same table, so a restock through one is seen by all.

use value_lessons_common::SharedMap;

/// Item name to quantity in stock.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stock: SharedMap<String, u32>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity of `item`, adding it if missing.
    pub fn set_quantity(&self, item: &str, quantity: u32) {
        self.stock.set(item.to_string(), quantity);
    }

    /// Quantity on hand; unknown items count as zero.
    #[must_use]
    pub fn quantity(&self, item: &str) -> u32 {
        self.stock.get(item)
    }

    /// Quantity of `item` if it is stocked at all.
    #[must_use]
    pub fn stocked(&self, item: &str) -> Option<u32> {
        match self.stock.lookup(item) {
            (quantity, true) => Some(quantity),
            (_, false) => None,
        }
    }

    /// Drops `item` from the inventory. Unknown items are ignored.
    pub fn remove(&self, item: &str) {
        self.stock.delete(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Items and quantities in unspecified order.
    #[must_use]
    pub fn items(&self) -> Vec<(String, u32)> {
        self.stock.entries()
    }

    /// Total units across all items.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.stock
            .entries()
            .into_iter()
            .map(|(_, qty)| u64::from(qty))
            .sum()
    }

    #[must_use]
    pub fn shares_stock_with(&self, other: &Inventory) -> bool {
        self.stock.aliases(&other.stock)
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stock)
    }
}

/// The opening stock: five laptops, twelve mice and eight keyboards.
#[must_use]
pub fn opening_inventory() -> Inventory {
    let inventory = Inventory::new();
    inventory.set_quantity("Laptop", 5);
    inventory.set_quantity("Mouse", 12);
    inventory.set_quantity("Keyboard", 8);
    inventory
}

/// `{"A": 1, "B": 2}` and a second handle to it; `C` is added through the
/// second handle and `A` removed through the first.
#[must_use]
pub fn alias_scenario() -> (SharedMap<String, i32>, SharedMap<String, i32>) {
    let original_map: SharedMap<String, i32> =
        [("A".to_string(), 1), ("B".to_string(), 2)].into_iter().collect();
    let referred_map = original_map.clone();

    referred_map.set("C".to_string(), 3);
    original_map.delete("A");

    (original_map, referred_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_inventory() {
        let inventory = opening_inventory();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.quantity("Laptop"), 5);
        assert_eq!(inventory.quantity("Monitor"), 0);
        assert_eq!(inventory.total_units(), 25);
    }

    #[test]
    fn test_total_units_past_u32() {
        let inventory = Inventory::new();
        inventory.set_quantity("Bolts", u32::MAX);
        inventory.set_quantity("Nuts", 1);
        assert_eq!(inventory.total_units(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_existence_check() {
        let inventory = opening_inventory();
        assert_eq!(inventory.stocked("Keyboard"), Some(8));
        assert_eq!(inventory.stocked("Speakers"), None);
    }

    #[test]
    fn test_update_and_delete() {
        let inventory = opening_inventory();
        inventory.set_quantity("Mouse", 15);
        inventory.remove("Keyboard");
        inventory.remove("Headphones");

        assert_eq!(inventory.to_string(), "map[Laptop:5 Mouse:15]");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_handles_share_stock() {
        let warehouse = opening_inventory();
        let storefront = warehouse.clone();

        storefront.set_quantity("Monitor", 2);

        assert_eq!(warehouse.stocked("Monitor"), Some(2));
        assert!(warehouse.shares_stock_with(&storefront));
    }

    #[test]
    fn test_alias_scenario() {
        let (original_map, referred_map) = alias_scenario();
        assert_eq!(original_map.to_string(), "map[B:2 C:3]");
        assert_eq!(referred_map.to_string(), "map[B:2 C:3]");
        assert_eq!(original_map.lookup("A"), (0, false));
    }

    #[test]
    fn test_items_unordered() {
        let mut items = opening_inventory().items();
        items.sort();
        assert_eq!(
            items,
            [
                ("Keyboard".to_string(), 8),
                ("Laptop".to_string(), 5),
                ("Mouse".to_string(), 12),
            ]
        );
    }
}
