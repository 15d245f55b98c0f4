//! Sinks that forward into the app's message channel.
//!
//! Fired channel tasks run on the tokio runtime, away from the render loop,
//! so they never touch `App` directly.

use tokio::sync::mpsc;
use tracing::trace;

use crate::models::{BreachStatus, RiskScore, StrengthReport};
use crate::traits::{BreachSink, RiskSink, StrengthSink};

use super::AppMessage;

#[derive(Debug, Clone)]
pub struct ChannelSinks {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl ChannelSinks {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }

    fn send(&self, msg: AppMessage) {
        // The receiver is gone once the UI has shut down
        if self.tx.send(msg).is_err() {
            trace!("app channel closed, dropping render");
        }
    }
}

impl StrengthSink for ChannelSinks {
    fn render_strength(&self, report: &StrengthReport) {
        self.send(AppMessage::StrengthRendered(report.clone()));
    }

    fn clear_strength(&self) {
        self.send(AppMessage::StrengthCleared);
    }
}

impl BreachSink for ChannelSinks {
    fn render_breach(&self, status: &BreachStatus) {
        self.send(AppMessage::BreachRendered(*status));
    }
}

impl RiskSink for ChannelSinks {
    fn render_risk(&self, score: RiskScore) {
        self.send(AppMessage::RiskRendered(score));
    }

    fn clear_risk(&self) {
        self.send(AppMessage::RiskCleared);
    }
}
