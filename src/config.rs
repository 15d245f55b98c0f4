//! Checker configuration.
//!
//! Defaults suit the bundled scoring server running locally. Every field can
//! be overridden from the environment (see [`CheckerConfig::from_env`]) and a
//! few from the command line.
//!
//! # Example
//!
//! ```
//! use pwcheck::config::CheckerConfig;
//! use std::time::Duration;
//!
//! let config = CheckerConfig::default()
//!     .with_endpoint("http://10.0.0.5:5000/check")
//!     .with_breach_delay(Duration::from_secs(2));
//! assert_eq!(config.strength_delay, Duration::from_millis(100));
//! ```

use std::time::Duration;

use crate::error::ConfigError;
use crate::orchestrator::ResponseOrdering;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/check";
/// Short enough to feel instant while typing
pub const DEFAULT_STRENGTH_DELAY: Duration = Duration::from_millis(100);
/// Breach lookups go to a rate-limited service
pub const DEFAULT_BREACH_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_ENDPOINT: &str = "PWCHECK_ENDPOINT";
pub const ENV_STRENGTH_DELAY_MS: &str = "PWCHECK_STRENGTH_DELAY_MS";
pub const ENV_BREACH_DELAY_MS: &str = "PWCHECK_BREACH_DELAY_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PWCHECK_REQUEST_TIMEOUT_SECS";
pub const ENV_ORDERING: &str = "PWCHECK_ORDERING";

/// Settings for the check client and the two debounce channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Full URL of the check endpoint (POST)
    pub endpoint: String,
    pub strength_delay: Duration,
    pub breach_delay: Duration,
    pub request_timeout: Duration,
    pub ordering: ResponseOrdering,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            strength_delay: DEFAULT_STRENGTH_DELAY,
            breach_delay: DEFAULT_BREACH_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            ordering: ResponseOrdering::default(),
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_strength_delay(mut self, delay: Duration) -> Self {
        self.strength_delay = delay;
        self
    }

    pub fn with_breach_delay(mut self, delay: Duration) -> Self {
        self.breach_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Build from `PWCHECK_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = lookup(ENV_STRENGTH_DELAY_MS) {
            config.strength_delay =
                Duration::from_millis(parse_number(ENV_STRENGTH_DELAY_MS, "milliseconds", &raw)?);
        }
        if let Some(raw) = lookup(ENV_BREACH_DELAY_MS) {
            config.breach_delay =
                Duration::from_millis(parse_number(ENV_BREACH_DELAY_MS, "milliseconds", &raw)?);
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            config.request_timeout =
                Duration::from_secs(parse_number(ENV_REQUEST_TIMEOUT_SECS, "seconds", &raw)?);
        }
        if let Some(raw) = lookup(ENV_ORDERING) {
            config.ordering = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject endpoints reqwest could never reach and delays that would let
    /// the breach channel fire as often as the strength channel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let has_host = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }

        if self.strength_delay.is_zero() {
            return Err(ConfigError::ZeroDelay("strength"));
        }
        if self.breach_delay <= self.strength_delay {
            return Err(ConfigError::BreachDelayTooShort {
                strength_ms: self.strength_delay.as_millis(),
                breach_ms: self.breach_delay.as_millis(),
            });
        }
        Ok(())
    }
}

fn parse_number(var: &'static str, unit: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        unit,
        value: raw.to_string(),
    })
}
