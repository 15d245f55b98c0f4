//! Risk meter.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::RiskScore;

use super::theme::{band_color, COLOR_BORDER, COLOR_DIM, COLOR_GAUGE_BG};

const RISK_EMPTY_HINT: &str = "No score yet";

pub fn risk_label(score: RiskScore) -> String {
    format!("Risk {}/100", score.value())
}

/// Gauge colored by band, or an empty frame when cleared.
pub fn render_risk_gauge(frame: &mut Frame, area: Rect, score: Option<RiskScore>) {
    let block = Block::default()
        .title(" Risk ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(score) = score else {
        let hint = Paragraph::new(Span::styled(RISK_EMPTY_HINT, Style::default().fg(COLOR_DIM)))
            .block(block.border_style(Style::default().fg(COLOR_BORDER)));
        frame.render_widget(hint, area);
        return;
    };

    let color = band_color(score.band());
    let gauge = Gauge::default()
        .block(block.border_style(Style::default().fg(color)))
        .gauge_style(Style::default().fg(color).bg(COLOR_GAUGE_BG))
        .percent(u16::from(score.value()))
        .label(Span::styled(
            risk_label(score),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, area);
}
