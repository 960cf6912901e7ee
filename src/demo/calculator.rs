//! Calculator demo: `Sum: 8` then `Difference: 6`.

use std::io::Write;

use tracing::debug;

use crate::calculator::Calculator;
use crate::error::Result;
use crate::output::print_labelled;

/// Display name given to the demo calculator.
pub const CALCULATOR_NAME: &str = "MyCalculator";

/// Writes `Sum: 8\nDifference: 6\n` to `out`.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing fails.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let calc = Calculator::new(CALCULATOR_NAME);
    debug!(calculator = calc.name(), "running calculator demo");

    let sum = calc.checked_add(5, 3)?;
    let diff = calc.checked_subtract(10, 4)?;

    print_labelled(out, "Sum", sum)?;
    print_labelled(out, "Difference", diff)?;
    out.flush()?;

    debug!(sum, diff, "calculator demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Sum: 8\nDifference: 6\n");
    }

    #[test]
    fn test_name_not_printed() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains(CALCULATOR_NAME));
    }
}
