//! Color theme constants for the pwcheck UI

use ratatui::style::Color;

use crate::models::{BreachStatus, RiskBand, StrengthTone};

// ============================================================================
// Base palette
// ============================================================================

pub const COLOR_BORDER: Color = Color::DarkGray;

pub const COLOR_HEADER: Color = Color::White;

/// Dim text for captions and hints
pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Result colors
// ============================================================================

/// Green #10b981
pub const COLOR_GOOD: Color = Color::Rgb(16, 185, 129);

/// Amber #f59e0b
pub const COLOR_WARN: Color = Color::Rgb(245, 158, 11);

/// Red #ef4444
pub const COLOR_BAD: Color = Color::Rgb(239, 68, 68);

/// Yellow #fbbf24, for scorer warnings
pub const COLOR_WARNING_TEXT: Color = Color::Rgb(251, 191, 36);

/// Blue #60a5fa, for in-flight lookups
pub const COLOR_PENDING: Color = Color::Rgb(96, 165, 250);

/// Gauge track
pub const COLOR_GAUGE_BG: Color = Color::Rgb(51, 65, 85);

pub fn tone_color(tone: StrengthTone) -> Color {
    match tone {
        StrengthTone::Good => COLOR_GOOD,
        StrengthTone::Warn => COLOR_WARN,
        StrengthTone::Bad => COLOR_BAD,
    }
}

pub fn band_color(band: RiskBand) -> Color {
    match band {
        RiskBand::Low => COLOR_GOOD,
        RiskBand::Medium => COLOR_WARN,
        RiskBand::High => COLOR_BAD,
    }
}

pub fn breach_color(status: BreachStatus) -> Color {
    match status {
        BreachStatus::Cleared => COLOR_DIM,
        BreachStatus::Checking => COLOR_PENDING,
        BreachStatus::Clean => COLOR_GOOD,
        BreachStatus::Breached { .. } => COLOR_BAD,
        BreachStatus::Unavailable => COLOR_WARN,
    }
}
