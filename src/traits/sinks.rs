//! Presentation sinks.
//!
//! A sink is a write-only surface: the orchestrator pushes structured values
//! into it and never reads anything back. The terminal front end implements
//! all three by forwarding into the app's message channel.

use std::sync::Arc;

use crate::models::{BreachStatus, RiskScore, StrengthReport};

/// Receives strength results.
pub trait StrengthSink: Send + Sync {
    fn render_strength(&self, report: &StrengthReport);
    fn clear_strength(&self);
}

/// Receives breach statuses, including the transient `Checking` state.
pub trait BreachSink: Send + Sync {
    fn render_breach(&self, status: &BreachStatus);
}

/// Receives the 0-100 risk score.
pub trait RiskSink: Send + Sync {
    fn render_risk(&self, score: RiskScore);
    fn clear_risk(&self);
}

/// The three sinks the orchestrator writes to.
#[derive(Clone)]
pub struct PresentationSinks {
    pub strength: Arc<dyn StrengthSink>,
    pub breach: Arc<dyn BreachSink>,
    pub risk: Arc<dyn RiskSink>,
}

impl PresentationSinks {
    pub fn new(
        strength: Arc<dyn StrengthSink>,
        breach: Arc<dyn BreachSink>,
        risk: Arc<dyn RiskSink>,
    ) -> Self {
        Self {
            strength,
            breach,
            risk,
        }
    }

    /// Use one value for all three sinks.
    pub fn shared<S>(sink: Arc<S>) -> Self
    where
        S: StrengthSink + BreachSink + RiskSink + 'static,
    {
        Self {
            strength: sink.clone(),
            breach: sink.clone(),
            risk: sink,
        }
    }

    /// Clear strength and risk together; they are never cleared separately.
    pub fn clear_strength_and_risk(&self) {
        self.strength.clear_strength();
        self.risk.clear_risk();
    }
}

impl std::fmt::Debug for PresentationSinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentationSinks").finish_non_exhaustive()
    }
}
