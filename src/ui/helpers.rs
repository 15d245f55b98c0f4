//! Small rendering helpers.

use ratatui::layout::Rect;

/// Braille spinner frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a loop tick. Advances every 6 ticks (~100ms at 16ms).
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[((tick_count / 6) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Area inset by `margin` cells on the left and right.
pub fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}
