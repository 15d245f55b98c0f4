//! Presentation sinks that record what they were given.

use std::sync::{Arc, Mutex};

use crate::models::{BreachStatus, RiskScore, StrengthReport};
use crate::traits::{BreachSink, RiskSink, StrengthSink};

/// One call into a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Strength(StrengthReport),
    StrengthCleared,
    Breach(BreachStatus),
    Risk(RiskScore),
    RiskCleared,
}

/// Implements all three sink traits and keeps an ordered log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSinks {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Strength renders and clears; `None` stands for a clear.
    pub fn strength_events(&self) -> Vec<Option<StrengthReport>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Strength(report) => Some(Some(report)),
                SinkEvent::StrengthCleared => Some(None),
                _ => None,
            })
            .collect()
    }

    pub fn breach_events(&self) -> Vec<BreachStatus> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Breach(status) => Some(status),
                _ => None,
            })
            .collect()
    }

    /// Risk renders and clears; `None` stands for a clear.
    pub fn risk_events(&self) -> Vec<Option<RiskScore>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Risk(score) => Some(Some(score)),
                SinkEvent::RiskCleared => Some(None),
                _ => None,
            })
            .collect()
    }

    pub fn last_breach(&self) -> Option<BreachStatus> {
        self.breach_events().pop()
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl StrengthSink for RecordingSinks {
    fn render_strength(&self, report: &StrengthReport) {
        self.push(SinkEvent::Strength(report.clone()));
    }

    fn clear_strength(&self) {
        self.push(SinkEvent::StrengthCleared);
    }
}

impl BreachSink for RecordingSinks {
    fn render_breach(&self, status: &BreachStatus) {
        self.push(SinkEvent::Breach(*status));
    }
}

impl RiskSink for RecordingSinks {
    fn render_risk(&self, score: RiskScore) {
        self.push(SinkEvent::Risk(score));
    }

    fn clear_risk(&self) {
        self.push(SinkEvent::RiskCleared);
    }
}
