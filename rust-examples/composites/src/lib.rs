//! Composites: Days 7-10
//!
//! How aggregate data behaves when it is assigned, passed and mutated:
//! - Arrays: fixed length, copied by value (Day 7)
//! - Slices: views that share a store until they outgrow it (Day 8)
//! - Maps: one table shared by every handle (Day 9)
//! - Structs: records copied by value, nested records included (Day 10)

pub mod day_7; // Arrays
pub mod day_8; // Slices
pub mod day_9; // Maps
pub mod day_10; // Structs
