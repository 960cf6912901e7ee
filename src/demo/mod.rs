//! Entry-point orchestration for the two demo programs.
//!
//! Each demo has fixed inputs and makes a single pass: compute, then write
//! its lines to the given writer. The binaries pass a locked stdout.
//!
//! # Usage
//!
//! ```
//! use fixture_demos::demo::Demo;
//!
//! let mut out = Vec::new();
//! Demo::Sum.run(&mut out).unwrap();
//! assert_eq!(out, b"Result: 30\n");
//! ```

pub mod calculator;
pub mod sum;

use std::io::Write;

use crate::error::Result;

/// One of the demo programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Adds 10 and 20 and prints `Result: 30`.
    Sum,
    /// Runs the named calculator and prints `Sum: 8` and `Difference: 6`.
    Calculator,
}

impl Demo {
    /// Runs the demo, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if arithmetic overflows or writing fails.
    pub fn run<W: Write>(self, out: &mut W) -> Result<()> {
        match self {
            Self::Sum => sum::run(out),
            Self::Calculator => calculator::run(out),
        }
    }
}
