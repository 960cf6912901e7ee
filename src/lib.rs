//! Fixture Demos
//!
//! Two small, deterministic demo programs and the library code behind them.
//!
//! # Overview
//!
//! - `sum-demo` adds 10 and 20 and prints `Result: 30`
//! - `calculator-demo` drives a named [`Calculator`] and prints
//!   `Sum: 8` and `Difference: 6`
//! - `fixture-demos` runs either one through a subcommand
//!
//! Stdout carries only demo output. Diagnostics go to stderr through
//! `tracing`.
//!
//! # Modules
//!
//! - [`ops`] - Addition, multiplication and the generic [`ops::maximum`]
//! - [`calculator`] - The named calculator
//! - [`output`] - Result line formatting
//! - [`demo`] - Entry-point orchestration for both demos
//! - [`error`] - Error types
//! - [`cli`] / [`logging`] - Shared command-line options and tracing setup
//!
//! # Example
//!
//! ```
//! use fixture_demos::demo::Demo;
//!
//! let mut out = Vec::new();
//! Demo::Calculator.run(&mut out)?;
//! assert_eq!(out, b"Sum: 8\nDifference: 6\n");
//! # Ok::<(), fixture_demos::Error>(())
//! ```

// Enforce documentation and other quality attributes
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are too strict
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_self)]

pub mod calculator;
pub mod cli;
pub mod demo;
pub mod error;
pub mod logging;
pub mod ops;
pub mod output;

// Re-export commonly used types at the crate root
pub use calculator::Calculator;
pub use error::{Error, Result};
