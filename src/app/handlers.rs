//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage};

impl App {
    /// Apply a render forwarded from a sink.
    /// Every message changes a view, so the app is always marked dirty.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::StrengthRendered(report) => self.strength = Some(report),
            AppMessage::StrengthCleared => self.strength = None,
            AppMessage::BreachRendered(status) => self.breach = status,
            AppMessage::RiskRendered(score) => self.risk = Some(score),
            AppMessage::RiskCleared => self.risk = None,
        }
    }

    /// Handle a key press. Returns false for keys with no binding.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit(),
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Char('r') if ctrl => self.toggle_reveal(),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                return false
            }
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Esc => self.reset(),
            _ => return false,
        }
        true
    }
}
