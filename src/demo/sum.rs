//! Sum demo: `Result: 30`.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::ops::checked_add;
use crate::output::print_result;

/// Writes `Result: 30\n` to `out`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing fails.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let x = 10;
    let y = 20;
    debug!(x, y, "running sum demo");

    let result = checked_add(x, y)?;
    print_result(out, result)?;
    out.flush()?;

    debug!(result, "sum demo finished");
    Ok(())
}
