//! Error types for the fixture demos.
//!
//! The demos have fixed inputs, so only two things can fail at runtime:
//! checked arithmetic overflowing and writing to the output stream. Both are
//! fatal and surface through the binaries' exit status.

use thiserror::Error;

/// A unified error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    /// A checked integer operation overflowed `i32`.
    #[error("arithmetic overflow: {lhs} {op} {rhs}")]
    Overflow {
        /// The operator symbol, e.g. `+` or `-`.
        op: &'static str,
        /// The left operand.
        lhs: i32,
        /// The right operand.
        rhs: i32,
    },

    /// Writing a result line failed (closed stdout, broken pipe, ...).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line configuration or logging setup.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for fixture-demos operations.
pub type Result<T> = std::result::Result<T, Error>;
