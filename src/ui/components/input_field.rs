//! Input Field Component
//!
//! A labelled text field with password masking and a block cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Label (1) + bordered box (3)
pub const INPUT_FIELD_HEIGHT: u16 = 4;

const BULLET: char = '\u{2022}';
const CURSOR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub focused: bool,
    /// Mask the value with bullets
    pub is_password: bool,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Text shown inside the box, before the cursor.
    pub fn display_value(&self) -> String {
        match self.placeholder {
            Some(placeholder) if self.value.is_empty() => placeholder.to_string(),
            _ if self.is_password => masked_value(self.value),
            _ => self.value.to_string(),
        }
    }
}

/// One bullet per character, not per byte.
pub fn masked_value(value: &str) -> String {
    std::iter::repeat(BULLET).take(value.chars().count()).collect()
}

/// The last `max_chars` characters of `text`, so the newest input stays in view.
pub fn visible_tail(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    match text.char_indices().nth(count - max_chars) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}

/// Render the label and the input box. Returns the rows consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1).min(3),
        ..area
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let text_style = if showing_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = Vec::with_capacity(2);
    if config.focused && showing_placeholder {
        spans.push(Span::styled(CURSOR.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(config.display_value(), text_style));
    } else if showing_placeholder {
        spans.push(Span::styled(config.display_value(), text_style));
    } else {
        // Borders take one column each side; the cursor takes one more
        let inner_width = usize::from(input_area.width.saturating_sub(2));
        let room = if config.focused {
            inner_width.saturating_sub(1)
        } else {
            inner_width
        };
        let value = config.display_value();
        let mut content = visible_tail(&value, room).to_string();
        if config.focused {
            content.push(CURSOR);
        }
        spans.push(Span::styled(content, text_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    INPUT_FIELD_HEIGHT.min(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Password", "secret")
            .focused(true)
            .password(true)
            .placeholder("Type a password");

        assert!(config.focused);
        assert!(config.is_password);
        assert_eq!(config.placeholder, Some("Type a password"));
    }

    #[test]
    fn test_masked_value_counts_chars() {
        assert_eq!(masked_value(""), "");
        assert_eq!(masked_value("abc"), "•••");
        assert_eq!(masked_value("pässwörd"), "••••••••");
    }

    #[test]
    fn test_display_value() {
        let masked = InputFieldConfig::new("Password", "hunter2").password(true);
        assert_eq!(masked.display_value(), "•••••••");

        let revealed = InputFieldConfig::new("Password", "hunter2");
        assert_eq!(revealed.display_value(), "hunter2");

        let empty = InputFieldConfig::new("Password", "")
            .password(true)
            .placeholder("Type a password");
        assert_eq!(empty.display_value(), "Type a password");
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("hunter2", 10), "hunter2");
        assert_eq!(visible_tail("hunter2", 3), "er2");
        assert_eq!(visible_tail("pässwörd", 4), "wörd");
        assert_eq!(visible_tail("abc", 0), "");
    }

    fn render_row(config: &InputFieldConfig, width: u16) -> String {
        let backend = TestBackend::new(width, INPUT_FIELD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_input_field(f, f.area(), config);
            })
            .unwrap();

        // Row 2 is the text row inside the box
        let buffer = terminal.backend().buffer();
        (0..width)
            .map(|x| buffer[(x, 2)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_long_value_keeps_tail_and_cursor_visible() {
        let config = InputFieldConfig::new("Password", "abcdefghijklmnopqrstuvwxyz").focused(true);
        let row = render_row(&config, 12);

        // 10 inner columns: the last 9 characters plus the cursor
        assert!(row.contains("rstuvwxyz\u{2588}"), "row was {:?}", row);
        assert!(!row.contains('q'));
    }

    #[test]
    fn test_long_masked_value_keeps_cursor_visible() {
        let config = InputFieldConfig::new("Password", "correct horse battery staple")
            .focused(true)
            .password(true);
        let row = render_row(&config, 12);

        assert!(row.contains("\u{2588}"), "row was {:?}", row);
        assert_eq!(row.chars().filter(|c| *c == BULLET).count(), 9);
    }

    #[test]
    fn test_short_value_is_not_scrolled() {
        let config = InputFieldConfig::new("Password", "hunter2").focused(true);
        let row = render_row(&config, 20);
        assert!(row.contains("hunter2\u{2588}"), "row was {:?}", row);
    }
}
