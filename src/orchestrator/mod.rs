//! Input orchestration: one password field, two debounced request channels.
//!
//! Every input change reschedules both channels:
//!
//! ```text
//!              on_input_changed(value)
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌──────────────┐         ┌──────────────┐
//!   │   strength   │         │    breach    │
//!   │   (100ms)    │         │   (1500ms)   │
//!   └──────┬───────┘         └──────┬───────┘
//!          │ fire                   │ fire
//!          ▼                        ▼
//!    check endpoint         cache ─ hit ─▶ render
//!          │                  │ miss
//!          ▼                  ▼
//!  strength + risk sinks   Checking → check endpoint → cache → breach sink
//! ```
//!
//! Both channels read the input value when their timer fires, not when it
//! was scheduled. Requests already in flight are never cancelled; see
//! [`ResponseOrdering`] for what happens when they return out of order.

mod cache;
mod debounce;
mod ordering;

pub use cache::BreachCache;
pub use debounce::DebounceSlot;
pub use ordering::{RequestSequence, ResponseOrdering};

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, trace, warn};

use crate::config::CheckerConfig;
use crate::models::{BreachCount, BreachStatus, CheckOutcome, CheckRequest};
use crate::traits::{PasswordChecker, PresentationSinks};

/// State shared with fired channel tasks.
struct Shared {
    checker: Arc<dyn PasswordChecker>,
    sinks: PresentationSinks,
    cache: Mutex<BreachCache>,
    ordering: ResponseOrdering,
    strength_seq: RequestSequence,
    breach_seq: RequestSequence,
}

/// Owns the input state, both debounce channels and the breach cache.
pub struct InputOrchestrator {
    input: watch::Sender<String>,
    strength: DebounceSlot,
    breach: DebounceSlot,
    shared: Arc<Shared>,
}

impl InputOrchestrator {
    pub fn new(
        checker: Arc<dyn PasswordChecker>,
        sinks: PresentationSinks,
        config: &CheckerConfig,
    ) -> Self {
        Self::with_cache(checker, sinks, config, BreachCache::new())
    }

    /// Start from an existing cache.
    pub fn with_cache(
        checker: Arc<dyn PasswordChecker>,
        sinks: PresentationSinks,
        config: &CheckerConfig,
        cache: BreachCache,
    ) -> Self {
        let (input, _) = watch::channel(String::new());
        Self {
            input,
            strength: DebounceSlot::new("strength", config.strength_delay),
            breach: DebounceSlot::new("breach", config.breach_delay),
            shared: Arc::new(Shared {
                checker,
                sinks,
                cache: Mutex::new(cache),
                ordering: config.ordering,
                strength_seq: RequestSequence::new(),
                breach_seq: RequestSequence::new(),
            }),
        }
    }

    /// Record the field's new value and reschedule both channels.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input_changed(&mut self, value: impl Into<String>) {
        let value = value.into();
        trace!(len = value.chars().count(), "input changed");
        self.input.send_replace(value);

        self.strength
            .schedule(fire_strength(self.shared.clone(), self.input.subscribe()));
        self.breach
            .schedule(fire_breach(self.shared.clone(), self.input.subscribe()));
    }

    /// Cancel pending timers, empty the input and blank all three sinks.
    ///
    /// Responses still in flight are outdated by the reset; they only render
    /// afterwards under [`ResponseOrdering::LastResponseWins`].
    pub fn reset(&mut self) {
        self.strength.cancel();
        self.breach.cancel();
        self.input.send_replace(String::new());
        self.shared.strength_seq.issue();
        self.shared.breach_seq.issue();

        self.shared.sinks.clear_strength_and_risk();
        self.shared.sinks.breach.render_breach(&BreachStatus::Cleared);
        debug!("orchestrator reset");
    }

    pub fn current_input(&self) -> String {
        self.input.borrow().clone()
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.shared.ordering
    }

    pub fn is_strength_scheduled(&self) -> bool {
        self.strength.is_scheduled()
    }

    pub fn is_breach_scheduled(&self) -> bool {
        self.breach.is_scheduled()
    }

    /// Cached breach count for an exact password, if any.
    pub async fn cached_breach(&self, password: &str) -> Option<BreachCount> {
        self.shared.cache.lock().await.get(password)
    }

    pub async fn cache_len(&self) -> usize {
        self.shared.cache.lock().await.len()
    }
}

impl std::fmt::Debug for InputOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputOrchestrator")
            .field("strength", &self.strength)
            .field("breach", &self.breach)
            .field("ordering", &self.shared.ordering)
            .finish_non_exhaustive()
    }
}

async fn fire_strength(shared: Arc<Shared>, input: watch::Receiver<String>) {
    let password = input.borrow().clone();
    let ticket = shared.strength_seq.issue();

    if password.is_empty() {
        debug!(ticket, "strength fired on empty input, clearing");
        shared.sinks.clear_strength_and_risk();
        return;
    }

    debug!(ticket, len = password.chars().count(), "strength check dispatched");
    let outcome = match shared.checker.check(&CheckRequest::new(password)).await {
        Ok(outcome) => outcome,
        Err(err) => {
            // Keep whatever is on screen; the next keystroke retries
            warn!(
                ticket,
                code = err.code(),
                transient = err.is_transient(),
                error = %err,
                "strength check failed"
            );
            return;
        }
    };

    if !shared.strength_seq.admits(shared.ordering, ticket) {
        debug!(
            ticket,
            latest = shared.strength_seq.latest(),
            "dropping superseded strength response"
        );
        return;
    }

    match outcome {
        CheckOutcome::Report(result) => {
            shared.sinks.strength.render_strength(&result.strength_report());
            shared.sinks.risk.render_risk(result.risk);
        }
        CheckOutcome::Empty => shared.sinks.clear_strength_and_risk(),
    }
}

async fn fire_breach(shared: Arc<Shared>, input: watch::Receiver<String>) {
    let password = input.borrow().clone();

    // Unlike strength, an empty field leaves the breach view alone
    if password.is_empty() {
        trace!("breach fired on empty input, nothing to do");
        return;
    }

    let ticket = shared.breach_seq.issue();

    let cached = shared.cache.lock().await.get(&password);
    if let Some(count) = cached {
        debug!(ticket, "breach cache hit");
        shared
            .sinks
            .breach
            .render_breach(&BreachStatus::from_count(count));
        return;
    }

    shared.sinks.breach.render_breach(&BreachStatus::Checking);
    debug!(ticket, len = password.chars().count(), "breach check dispatched");

    let count = match shared.checker.check(&CheckRequest::new(password.clone())).await {
        Ok(CheckOutcome::Report(result)) => result.breach,
        Ok(CheckOutcome::Empty) => {
            warn!(ticket, "endpoint reported empty input for a breach check");
            BreachCount::Unavailable
        }
        Err(err) => {
            warn!(
                ticket,
                code = err.code(),
                transient = err.is_transient(),
                error = %err,
                "breach check failed"
            );
            BreachCount::Unavailable
        }
    };

    if shared.cache.lock().await.insert(password, count) {
        trace!(ticket, "breach count cached");
    }

    if !shared.breach_seq.admits(shared.ordering, ticket) {
        debug!(
            ticket,
            latest = shared.breach_seq.latest(),
            "dropping superseded breach response"
        );
        return;
    }

    shared
        .sinks
        .breach
        .render_breach(&BreachStatus::from_count(count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockChecker, RecordingSinks, SinkEvent};
    use crate::models::{CheckResult, RiskScore};
    use std::time::Duration;

    fn result(pwned: BreachCount, risk: u8) -> CheckOutcome {
        CheckOutcome::Report(CheckResult {
            bits: 24.0,
            crack_time: "2 minutes".to_string(),
            score: 1,
            warning: None,
            sequences: Vec::new(),
            breach: pwned,
            risk: RiskScore::new(risk),
        })
    }

    fn setup(config: &CheckerConfig) -> (InputOrchestrator, MockChecker, Arc<RecordingSinks>) {
        let checker = MockChecker::new();
        let sinks = Arc::new(RecordingSinks::new());
        let orchestrator = InputOrchestrator::new(
            Arc::new(checker.clone()),
            PresentationSinks::shared(sinks.clone()),
            config,
        );
        (orchestrator, checker, sinks)
    }

    #[tokio::test(start_paused = true)]
    async fn test_on_input_changed_schedules_both_channels() {
        let (mut orchestrator, checker, _sinks) = setup(&CheckerConfig::default());
        checker.set_default_response(Ok(result(BreachCount::Known(0), 10)));

        orchestrator.on_input_changed("abc");
        assert!(orchestrator.is_strength_scheduled());
        assert!(orchestrator.is_breach_scheduled());
        assert_eq!(orchestrator.current_input(), "abc");

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!orchestrator.is_strength_scheduled());
        assert!(orchestrator.is_breach_scheduled());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!orchestrator.is_breach_scheduled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_and_clears() {
        let (mut orchestrator, checker, sinks) = setup(&CheckerConfig::default());
        checker.set_default_response(Ok(result(BreachCount::Known(0), 10)));

        orchestrator.on_input_changed("abc");
        orchestrator.reset();
        assert!(!orchestrator.is_strength_scheduled());
        assert!(!orchestrator.is_breach_scheduled());
        assert_eq!(orchestrator.current_input(), "");

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(checker.calls().is_empty());
        assert_eq!(
            sinks.events(),
            vec![
                SinkEvent::StrengthCleared,
                SinkEvent::RiskCleared,
                SinkEvent::Breach(BreachStatus::Cleared),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_injected_cache_is_used() {
        let mut cache = BreachCache::new();
        cache.insert("known", BreachCount::Known(4));
        let checker = MockChecker::new();
        checker.set_default_response(Ok(result(BreachCount::Known(4), 60)));
        let sinks = Arc::new(RecordingSinks::new());
        let mut orchestrator = InputOrchestrator::with_cache(
            Arc::new(checker.clone()),
            PresentationSinks::shared(sinks.clone()),
            &CheckerConfig::default(),
            cache,
        );

        orchestrator.on_input_changed("known");
        tokio::time::sleep(Duration::from_millis(1600)).await;

        // Only the strength channel went to the network
        assert_eq!(checker.calls(), vec!["known".to_string()]);
        assert_eq!(
            sinks.breach_events(),
            vec![BreachStatus::Breached { count: 4 }]
        );
        assert_eq!(orchestrator.cached_breach("known").await, Some(BreachCount::Known(4)));
        assert_eq!(orchestrator.cache_len().await, 1);
    }
}
