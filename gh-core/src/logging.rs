//! Tracing setup.
//!
//! Log output always goes to stderr: stdout carries the JSON records the
//! listing tools produce and must not be interleaved with diagnostics.

use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::ConfigError;

/// Parse a log level name (case-insensitive).
///
/// Besides the tracing level names this accepts `warning`, and `fatal` and
/// `panic` as aliases for `error`.
pub fn parse_level(name: &str) -> Result<LevelFilter, ConfigError> {
  match name.trim().to_ascii_lowercase().as_str() {
    "off" => Ok(LevelFilter::OFF),
    "panic" | "fatal" | "error" => Ok(LevelFilter::ERROR),
    "warn" | "warning" => Ok(LevelFilter::WARN),
    "info" => Ok(LevelFilter::INFO),
    "debug" => Ok(LevelFilter::DEBUG),
    "trace" => Ok(LevelFilter::TRACE),
    _ => Err(ConfigError::InvalidLogLevel(name.to_string())),
  }
}

/// Initialise the global subscriber at `level`, writing to stderr.
///
/// `RUST_LOG` directives are honoured in addition to `level`. Calling this
/// twice is harmless; the second call is ignored.
pub fn init_tracing(level: LevelFilter) {
  let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
  let filter = EnvFilter::from_default_env().add_directive(level.into());

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt_layer)
    .try_init()
    .ok();

  debug!("Tracing initialized with level: {}", level);
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;

  #[test_case("off", LevelFilter::OFF)]
  #[test_case("panic", LevelFilter::ERROR)]
  #[test_case("fatal", LevelFilter::ERROR)]
  #[test_case("error", LevelFilter::ERROR)]
  #[test_case("warn", LevelFilter::WARN)]
  #[test_case("Warning", LevelFilter::WARN)]
  #[test_case("INFO", LevelFilter::INFO)]
  #[test_case(" debug ", LevelFilter::DEBUG)]
  #[test_case("trace", LevelFilter::TRACE)]
  fn parses_known_levels(name: &str, expected: LevelFilter) {
    assert_eq!(parse_level(name).unwrap(), expected);
  }

  #[test]
  fn rejects_unknown_level() {
    let err = parse_level("verbose").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "verbose"));
  }
}
