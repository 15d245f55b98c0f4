//! AppMessage enum for async communication within the application.

use crate::models::{BreachStatus, RiskScore, StrengthReport};

/// Render requests forwarded from the orchestrator's sinks.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// A strength check came back
    StrengthRendered(StrengthReport),
    /// The field was emptied, or the endpoint saw an empty password
    StrengthCleared,
    /// New breach status, including `Checking`
    BreachRendered(BreachStatus),
    RiskRendered(RiskScore),
    RiskCleared,
}
