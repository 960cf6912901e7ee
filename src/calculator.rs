//! The named calculator.

use crate::error::{Error, Result};

/// A calculator with a display name and two integer operations.
///
/// The name is fixed at construction. The demos never print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    name: String,
}

impl Calculator {
    /// Creates a new calculator with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `a + b`. Overflow follows native `i32` semantics.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }

    /// Returns `a - b`. Overflow follows native `i32` semantics.
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        a - b
    }

    /// Checked form of [`Calculator::add`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the sum does not fit in an `i32`.
    pub fn checked_add(&self, a: i32, b: i32) -> Result<i32> {
        a.checked_add(b).ok_or(Error::Overflow {
            op: "+",
            lhs: a,
            rhs: b,
        })
    }

    /// Checked form of [`Calculator::subtract`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the difference does not fit in an `i32`.
    pub fn checked_subtract(&self, a: i32, b: i32) -> Result<i32> {
        a.checked_sub(b).ok_or(Error::Overflow {
            op: "-",
            lhs: a,
            rhs: b,
        })
    }
}
