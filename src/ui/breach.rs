//! Breach status line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::BreachStatus;

use super::helpers::spinner_frame;
use super::theme::breach_color;

pub fn breach_line(status: BreachStatus, tick_count: u64) -> Line<'static> {
    let style = Style::default().fg(breach_color(status));
    match status {
        BreachStatus::Cleared => Line::default(),
        BreachStatus::Checking => Line::from(vec![
            Span::styled(format!("{} ", spinner_frame(tick_count)), style),
            Span::styled(status.message(), style),
        ]),
        _ => Line::from(Span::styled(status.message(), style)),
    }
}

pub fn render_breach_line(frame: &mut Frame, area: Rect, status: BreachStatus, tick_count: u64) {
    frame.render_widget(Paragraph::new(breach_line(status, tick_count)), area);
}
