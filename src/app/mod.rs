//! Application state for the TUI.
//!
//! [`App`] owns the password field and the last values pushed into each of
//! the three views. Edits go to the [`InputOrchestrator`]; results come back
//! as [`AppMessage`]s through [`ChannelSinks`] and are applied in
//! [`App::handle_message`].

mod handlers;
mod messages;
mod sinks;

pub use messages::AppMessage;
pub use sinks::ChannelSinks;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::CheckerConfig;
use crate::models::{BreachStatus, RiskScore, StrengthReport};
use crate::orchestrator::{InputOrchestrator, ResponseOrdering};
use crate::traits::{PasswordChecker, PresentationSinks};

/// Main application state
pub struct App {
    /// Current contents of the password field
    pub input: String,
    /// Show the password in clear text instead of bullets
    pub reveal: bool,
    /// Strength view; `None` when cleared
    pub strength: Option<StrengthReport>,
    pub breach: BreachStatus,
    /// Risk meter; `None` when cleared
    pub risk: Option<RiskScore>,
    /// Endpoint shown in the header
    pub endpoint: String,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag, the loop only redraws when set
    pub needs_redraw: bool,
    /// Incremented every loop tick, drives the spinner
    pub tick_count: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    orchestrator: InputOrchestrator,
}

impl App {
    pub fn new(config: &CheckerConfig, checker: Arc<dyn PasswordChecker>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let sinks = Arc::new(ChannelSinks::new(message_tx.clone()));
        let orchestrator =
            InputOrchestrator::new(checker, PresentationSinks::shared(sinks), config);

        Self {
            input: String::new(),
            reveal: false,
            strength: None,
            breach: BreachStatus::Cleared,
            risk: None,
            endpoint: config.endpoint.clone(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &InputOrchestrator {
        &self.orchestrator
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.orchestrator.ordering()
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.input_changed();
    }

    /// Append pasted text, dropping line breaks.
    pub fn push_str(&mut self, text: &str) {
        let before = self.input.len();
        self.input
            .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        if self.input.len() != before {
            self.input_changed();
        }
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.input_changed();
        }
    }

    /// Empty the field. Counts as an edit, so both channels reschedule.
    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.input.clear();
            self.input_changed();
        }
    }

    /// Empty the field and blank all three views right away.
    pub fn reset(&mut self) {
        self.input.clear();
        self.orchestrator.reset();
        self.mark_dirty();
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal = !self.reveal;
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Animate the spinner while a breach lookup is in flight
        if self.breach == BreachStatus::Checking && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    fn input_changed(&mut self) {
        self.orchestrator.on_input_changed(self.input.clone());
        self.mark_dirty();
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("input_len", &self.input.chars().count())
            .field("reveal", &self.reveal)
            .field("breach", &self.breach)
            .field("risk", &self.risk)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}
