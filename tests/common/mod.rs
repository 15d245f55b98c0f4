//! Common test utilities for integration tests.
//!
//! Fixtures for check results and a harness that wires an
//! [`InputOrchestrator`] to a [`MockChecker`] and [`RecordingSinks`].
//!
//! # Example
//!
//! ```ignore
//! let h = Harness::new(&CheckerConfig::default());
//! h.checker.set_default_response(Ok(report(2, BreachCount::Known(0), 30)));
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use pwcheck::adapters::{MockChecker, RecordingSinks};
use pwcheck::config::CheckerConfig;
use pwcheck::models::{BreachCount, CheckOutcome, CheckResult, RiskScore, StrengthReport};
use pwcheck::orchestrator::InputOrchestrator;
use pwcheck::traits::PresentationSinks;
use serde_json::{json, Value};

/// Successful check with the given score, breach count and risk.
pub fn report(score: u8, breach: BreachCount, risk: u8) -> CheckOutcome {
    CheckOutcome::Report(result(f64::from(score) * 10.0, score, breach, risk))
}

/// Successful check whose bit estimate identifies it in assertions.
pub fn report_with_bits(bits: f64, breach: BreachCount) -> CheckOutcome {
    CheckOutcome::Report(result(bits, 2, breach, 50))
}

pub fn result(bits: f64, score: u8, breach: BreachCount, risk: u8) -> CheckResult {
    CheckResult {
        bits,
        crack_time: "3 hours".to_string(),
        score,
        warning: None,
        sequences: Vec::new(),
        breach,
        risk: RiskScore::new(risk),
    }
}

/// Bits of each rendered strength report, `None` for clears.
pub fn rendered_bits(events: &[Option<StrengthReport>]) -> Vec<Option<f64>> {
    events.iter().map(|e| e.as_ref().map(|r| r.bits)).collect()
}

/// Body the scoring endpoint returns for a non-empty password.
pub fn wire_report(pwned: i64, risk: f64) -> Value {
    json!({
        "empty": false,
        "bits": 18.7,
        "crack_time": "3 seconds",
        "warning": "This is similar to a commonly used password",
        "score": 1,
        "pwned": pwned,
        "sequences": [
            {"pattern": "dictionary", "token": "hunter", "i": 0, "j": 5,
             "dictionary_name": "passwords", "rank": 1023},
            {"pattern": "bruteforce", "token": "2", "i": 6, "j": 6}
        ],
        "risk": risk
    })
}

/// Advance the paused test clock.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Orchestrator wired to scriptable collaborators.
pub struct Harness {
    pub orchestrator: InputOrchestrator,
    pub checker: MockChecker,
    pub sinks: Arc<RecordingSinks>,
}

impl Harness {
    pub fn new(config: &CheckerConfig) -> Self {
        let checker = MockChecker::new();
        let sinks = Arc::new(RecordingSinks::new());
        let orchestrator = InputOrchestrator::new(
            Arc::new(checker.clone()),
            PresentationSinks::shared(sinks.clone()),
            config,
        );
        Self {
            orchestrator,
            checker,
            sinks,
        }
    }

    pub fn type_value(&mut self, value: &str) {
        self.orchestrator.on_input_changed(value);
    }
}
