//! Day 5: Functions and Deferred Cleanup
//!
//! Functions with several results, failures reported as explicit `Result`s
//! the caller has to check, and cleanup registered up front that runs in
//! reverse order when the function exits, including by panic.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use value_lessons_common::DomainError;

/// Sum of two integers, widened so every pair of inputs has a result.
#[must_use]
pub fn add(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Area and circumference of a circle.
#[must_use]
pub fn circle_metrics(radius: f64) -> (f64, f64) {
    let area = PI * radius * radius;
    let circumference = 2.0 * PI * radius;
    (area, circumference)
}

/// Divides, refusing a zero denominator instead of producing infinity.
///
/// ```
/// use value_lessons_common::DomainError;
/// use value_lessons_fundamentals::divide;
///
/// assert_eq!(divide(10.0, 2.0), Ok(5.0));
/// assert_eq!(divide(10.0, 0.0), Err(DomainError::DivideByZero));
/// ```
pub fn divide(numerator: f64, denominator: f64) -> Result<f64, DomainError> {
    if denominator == 0.0 {
        return Err(DomainError::DivideByZero);
    }
    Ok(numerator / denominator)
}

// =============================================================================
// Deferred Cleanup
// =============================================================================

/// Cleanup actions run last-registered-first when the guard is dropped.
///
/// Dropping happens on normal return, early return and unwinding alike, so
/// registered actions always run. An action that panics does not stop the
/// ones registered before it; the first such panic is resumed once every
/// action has run.
///
/// ```
/// use std::cell::RefCell;
/// use value_lessons_fundamentals::Deferred;
///
/// let log = RefCell::new(Vec::new());
/// {
///     let mut cleanup = Deferred::new();
///     cleanup.defer(|| log.borrow_mut().push("closed"));
///     cleanup.defer(|| log.borrow_mut().push("flushed"));
///     log.borrow_mut().push("working");
/// }
/// assert_eq!(log.into_inner(), ["working", "flushed", "closed"]);
/// ```
#[derive(Default)]
pub struct Deferred<'a> {
    actions: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> Deferred<'a> {
    #[must_use]
    pub fn new() -> Self {
        Deferred {
            actions: Vec::new(),
        }
    }

    /// Registers `action` to run when the guard is dropped.
    pub fn defer(&mut self, action: impl FnOnce() + 'a) {
        self.actions.push(Box::new(action));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Drop for Deferred<'_> {
    fn drop(&mut self) {
        let mut first_panic = None;
        while let Some(action) = self.actions.pop() {
            tracing::trace!(remaining = self.actions.len(), "running deferred action");
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
                tracing::debug!(remaining = self.actions.len(), "deferred action panicked");
                first_panic.get_or_insert(payload);
            }
        }
        // Resuming while already unwinding would abort the process.
        if let Some(payload) = first_panic {
            if !thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}

/// Walks through opening, reading and closing a file, returning each step in
/// the order it happened.
#[must_use]
pub fn simulate_file_processing(filename: &str) -> Vec<String> {
    let journal = RefCell::new(Vec::new());
    {
        let record = |line: String| journal.borrow_mut().push(line);

        record(format!("Attempting to open file: {filename}"));
        record("File opened successfully.".to_string());

        let mut cleanup = Deferred::new();
        cleanup.defer(|| record("File closed.".to_string()));
        cleanup.defer(|| record("Performing final cleanup...".to_string()));

        record("Reading data from file...".to_string());
        record("Data processing complete.".to_string());
    }
    journal.into_inner()
}
