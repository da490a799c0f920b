//! Fundamentals: Days 2-5
//!
//! The building blocks every later lesson leans on:
//! - Declarations, constants and zero values (Day 2)
//! - Conditionals and switches (Day 3)
//! - Loops and iteration over strings (Day 4)
//! - Functions, explicit error results and deferred cleanup (Day 5)

pub mod day_2; // Declarations and Zero Values
pub mod day_3; // Control Flow
pub mod day_4; // Loops
pub mod day_5; // Functions and Deferred Cleanup

// Re-export commonly used items.
pub use day_5::{Deferred, divide};
