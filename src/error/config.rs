//! Configuration errors.

use thiserror::Error;

/// Invalid configuration from environment variables or command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of {unit}, got {value:?}")]
    InvalidNumber {
        var: &'static str,
        unit: &'static str,
        value: String,
    },

    #[error("unknown response ordering {0:?} (expected `last-response` or `last-request`)")]
    UnknownOrdering(String),

    #[error("endpoint must be an http:// or https:// URL, got {0:?}")]
    InvalidEndpoint(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("{0} delay must be greater than zero")]
    ZeroDelay(&'static str),

    #[error("breach delay ({breach_ms}ms) must be longer than strength delay ({strength_ms}ms)")]
    BreachDelayTooShort { strength_ms: u128, breach_ms: u128 },
}
