//! Command-line options shared by every binary.

use clap::Args;
use tracing::Level;

use crate::error::{Error, Result};

/// Logging options, flattened into each binary's parser.
#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl LogArgs {
    /// Parses the log level string into a tracing Level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for anything other than the five level names.
    pub fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => Err(Error::Config(format!("invalid log level: {other}"))),
        }
    }
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(level: &str) -> LogArgs {
        LogArgs {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(args("debug").level().unwrap(), Level::DEBUG);
        assert_eq!(args("ERROR").level().unwrap(), Level::ERROR);
        assert_eq!(LogArgs::default().level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_invalid_log_level() {
        let err = args("loud").level().unwrap_err();
        assert!(err.to_string().contains("invalid log level: loud"));
    }
}
