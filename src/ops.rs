//! Free-standing arithmetic helpers and the generic maximum.
//!
//! `add` and `multiply` use native `i32` arithmetic: overflow panics in debug
//! builds and wraps (two's complement) in release builds. Callers that need
//! overflow to be an error in every profile use [`checked_add`].

use crate::error::{Error, Result};

/// Adds two integers.
///
/// # Panics
///
/// Panics on overflow when built with `overflow-checks` (the debug default).
/// Release builds wrap instead.
///
/// # Examples
///
/// ```
/// assert_eq!(fixture_demos::ops::add(10, 20), 30);
/// ```
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Adds two integers, reporting overflow as [`Error::Overflow`].
///
/// # Errors
///
/// Returns [`Error::Overflow`] if `a + b` does not fit in an `i32`.
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or(Error::Overflow {
        op: "+",
        lhs: a,
        rhs: b,
    })
}

/// Multiplies two integers. Same overflow semantics as [`add`].
pub fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

/// Returns the greater of two values.
///
/// Ties go to `a`. If the pair is unordered (a `NaN` float), `a >= b` is
/// false and `b` is returned.
///
/// ```
/// use fixture_demos::ops::maximum;
///
/// assert_eq!(maximum(3, 7), 7);
/// assert_eq!(maximum("pear", "apple"), "pear");
/// ```
pub fn maximum<T: PartialOrd>(a: T, b: T) -> T {
    if a >= b { a } else { b }
}
