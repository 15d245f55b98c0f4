//! UI rendering for pwcheck.
//!
//! One screen, top to bottom: header, password field, strength panel,
//! breach status line, risk meter and key hints.

pub mod components;
mod breach;
mod helpers;
mod risk;
mod strength;
mod theme;

pub use breach::breach_line;
pub use helpers::{spinner_frame, SPINNER_FRAMES};
pub use risk::risk_label;
pub use strength::strength_lines;
pub use theme::{
    band_color, breach_color, tone_color, COLOR_BAD, COLOR_BORDER, COLOR_DIM, COLOR_GOOD,
    COLOR_HEADER, COLOR_PENDING, COLOR_WARN,
};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::orchestrator::ResponseOrdering;
use components::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use helpers::inset_horizontal;

const KEY_HINTS: &str = "Ctrl+R reveal  Ctrl+U clear  Esc reset  Ctrl+C quit";

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    let area = inset_horizontal(frame.area(), 2);

    let [header, _, input, strength, breach, risk, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app);

    let field = InputFieldConfig::new("Password", &app.input)
        .focused(true)
        .password(!app.reveal)
        .placeholder("Type a password");
    render_input_field(frame, input, &field);

    strength::render_strength_panel(frame, strength, app.strength.as_ref());
    breach::render_breach_line(frame, breach, app.breach, app.tick_count);
    risk::render_risk_gauge(frame, risk, app.risk);

    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM))),
        footer,
    );
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            "pwcheck",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.endpoint), Style::default().fg(COLOR_DIM)),
    ];
    if app.ordering() == ResponseOrdering::LastRequestWins {
        spans.push(Span::styled(
            format!("  [{}]", app.ordering()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
