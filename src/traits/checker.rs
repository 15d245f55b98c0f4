//! The scoring endpoint as seen by the orchestrator.

use async_trait::async_trait;

use crate::error::CheckError;
use crate::models::{CheckOutcome, CheckRequest};

/// Something that can score a password and look up its breach count.
///
/// The production implementation is [`crate::client::CheckClient`]; tests use
/// [`crate::adapters::mock::MockChecker`].
#[async_trait]
pub trait PasswordChecker: Send + Sync {
    async fn check(&self, request: &CheckRequest) -> Result<CheckOutcome, CheckError>;
}
