//! Tracing setup.
//!
//! Logs always go to stderr. Stdout carries only demo output and must stay
//! byte-exact.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{Error, Result};

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when set.
///
/// # Errors
///
/// Returns [`Error::Config`] if a global subscriber is already installed.
pub fn init_tracing(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fixture_demos={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("failed to initialize tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // Whichever call installs first wins; at least one of two must fail.
        let first = init_tracing(Level::WARN);
        let second = init_tracing(Level::WARN);
        assert!(first.is_err() || second.is_err());
        assert!(matches!(second, Err(Error::Config(_))));
    }
}
