//! Client for the password scoring endpoint.
//!
//! The endpoint takes `POST {"password": "..."}` and answers with the
//! scorer's strength analysis, the breach count and a combined risk score in
//! one JSON object.

use async_trait::async_trait;

use crate::adapters::ReqwestHttpClient;
use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::models::{CheckOutcome, CheckRequest};
use crate::traits::{Headers, HttpClient, PasswordChecker};

/// [`PasswordChecker`] that talks to the scoring endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct CheckClient<C = ReqwestHttpClient> {
    endpoint: String,
    http: C,
}

impl CheckClient<ReqwestHttpClient> {
    /// Reqwest-backed client for the configured endpoint and timeout.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, CheckError> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::new(config.endpoint.clone(), http))
    }
}

impl<C: HttpClient> CheckClient<C> {
    pub fn new(endpoint: impl Into<String>, http: C) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }
}

#[async_trait]
impl<C: HttpClient> PasswordChecker for CheckClient<C> {
    async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, CheckError> {
        let body = serde_json::json!({ "password": request.password }).to_string();

        let response = self
            .http
            .post(&self.endpoint, &body, &Self::headers())
            .await?;

        if !response.is_success() {
            let message = response.text();
            let message = if message.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                message
            };
            return Err(CheckError::Server {
                status: response.status,
                message,
            });
        }

        CheckOutcome::from_slice(&response.body)
    }
}
