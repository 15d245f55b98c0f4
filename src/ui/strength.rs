//! Strength panel: bit estimate, crack time, warning and matched patterns.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{StrengthReport, CRACK_TIME_ASSUMPTION};

use super::theme::{tone_color, COLOR_BORDER, COLOR_DIM, COLOR_WARNING_TEXT};

const EMPTY_HINT: &str = "Start typing to see how strong the password is";

/// Lines for the strength panel body.
pub fn strength_lines(report: Option<&StrengthReport>) -> Vec<Line<'static>> {
    let Some(report) = report else {
        return vec![Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(COLOR_DIM),
        ))];
    };

    let tone = Style::default().fg(tone_color(report.tone()));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(report.bits_label(), tone.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  score {}/4", report.score),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(vec![
            Span::styled("Crack time: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(report.crack_time.clone()),
        ]),
        Line::from(Span::styled(
            format!("({})", CRACK_TIME_ASSUMPTION),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    if let Some(warning) = &report.warning {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", warning),
            Style::default()
                .fg(COLOR_WARNING_TEXT)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if report.sequences.is_empty() {
        return lines;
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Matched patterns",
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for seq in &report.sequences {
        lines.push(Line::from(vec![
            Span::styled(seq.pattern.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  \"{}\" ({}-{})", seq.token, seq.i, seq.j)),
        ]));
        for (key, value) in seq.extra_fields() {
            lines.push(Line::from(Span::styled(
                format!("    {}: {}", key, value),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines
}

pub fn render_strength_panel(frame: &mut Frame, area: Rect, report: Option<&StrengthReport>) {
    let border_color = report
        .map(|r| tone_color(r.tone()))
        .unwrap_or(COLOR_BORDER);
    let block = Block::default()
        .title(" Strength ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(strength_lines(report))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
