//! Line formatting for demo results.
//!
//! Writers are injected so that binaries can pass a locked stdout and tests
//! can pass a `Vec<u8>`.

use std::io::Write;

use crate::error::Result;

/// Writes `Result: <result>\n`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the writer fails.
pub fn print_result<W: Write>(out: &mut W, result: i32) -> Result<()> {
    print_labelled(out, "Result", result)
}

/// Writes `<label>: <value>\n`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the writer fails.
pub fn print_labelled<W: Write>(out: &mut W, label: &str, value: i32) -> Result<()> {
    writeln!(out, "{label}: {value}")?;
    Ok(())
}
