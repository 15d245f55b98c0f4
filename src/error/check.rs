//! Errors raised while checking a password against the scoring endpoint.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single check request.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// The request never produced a response (connection, timeout, ...)
    #[error("check request failed: {0}")]
    Http(#[from] HttpError),

    /// The endpoint answered with a non-2xx status
    #[error("check endpoint returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The endpoint answered 2xx but the body was not a check result
    #[error("malformed check response: {0}")]
    MalformedResponse(String),
}

impl CheckError {
    /// Whether retrying the same request later could succeed.
    ///
    /// Malformed bodies are a contract mismatch with the endpoint and will not
    /// fix themselves; everything else is an outage.
    pub fn is_transient(&self) -> bool {
        match self {
            CheckError::Http(_) => true,
            CheckError::Server { status, .. } => *status >= 500 || *status == 429,
            CheckError::MalformedResponse(_) => false,
        }
    }

    /// Short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::Http(_) => "CHECK_HTTP",
            CheckError::Server { .. } => "CHECK_SERVER",
            CheckError::MalformedResponse(_) => "CHECK_MALFORMED",
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::MalformedResponse(err.to_string())
    }
}
