//! Handling of responses that arrive after a newer request was issued.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ConfigError;

/// Which response gets to render when requests on one channel overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Every response renders when it arrives; a slow older response can
    /// overwrite a newer one.
    #[default]
    LastResponseWins,
    /// Only the most recently fired request on a channel may render.
    LastRequestWins,
}

impl ResponseOrdering {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseOrdering::LastResponseWins => "last-response",
            ResponseOrdering::LastRequestWins => "last-request",
        }
    }
}

impl fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseOrdering {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-response" | "last-response-wins" => Ok(ResponseOrdering::LastResponseWins),
            "last-request" | "last-request-wins" => Ok(ResponseOrdering::LastRequestWins),
            _ => Err(ConfigError::UnknownOrdering(s.to_string())),
        }
    }
}

/// Monotonic per-channel ticket counter.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket; it becomes the latest.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Whether a response holding `ticket` may render under `ordering`.
    pub fn admits(&self, ordering: ResponseOrdering, ticket: u64) -> bool {
        match ordering {
            ResponseOrdering::LastResponseWins => true,
            ResponseOrdering::LastRequestWins => ticket == self.latest(),
        }
    }
}
