//! Values pushed into the presentation sinks.

use super::check::{BreachCount, PatternMatch};

/// Caption shown under the crack-time estimate.
pub const CRACK_TIME_ASSUMPTION: &str =
    "Assumes an offline attack on a fast hash at 10 billion guesses/sec";

/// Strength fields of a check result.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub bits: f64,
    pub crack_time: String,
    /// Scorer's 0-4 score
    pub score: u8,
    pub warning: Option<String>,
    pub sequences: Vec<PatternMatch>,
    /// Carried so the strength view can color itself by breach exposure
    pub breach: BreachCount,
}

/// Overall tone of the strength view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTone {
    Good,
    Warn,
    Bad,
}

impl StrengthReport {
    pub fn tone(&self) -> StrengthTone {
        match self.breach {
            BreachCount::Known(count) if count > 1_000_000 => StrengthTone::Bad,
            BreachCount::Known(count) if count > 0 => StrengthTone::Warn,
            _ if self.score < 3 => StrengthTone::Warn,
            _ => StrengthTone::Good,
        }
    }

    /// Bit estimate formatted the way the scorer rounds it.
    pub fn bits_label(&self) -> String {
        format!("{:.1} bits", self.bits)
    }
}

/// What the breach view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreachStatus {
    /// Neutral, nothing shown
    #[default]
    Cleared,
    /// A lookup is in flight
    Checking,
    Clean,
    Breached {
        count: u64,
    },
    Unavailable,
}

impl BreachStatus {
    pub fn from_count(count: BreachCount) -> Self {
        match count {
            BreachCount::Known(0) => BreachStatus::Clean,
            BreachCount::Known(count) => BreachStatus::Breached { count },
            BreachCount::Unavailable => BreachStatus::Unavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BreachStatus::Cleared => String::new(),
            BreachStatus::Checking => "Checking breaches…".to_string(),
            BreachStatus::Clean => "Not found in breaches ✔".to_string(),
            BreachStatus::Breached { count } => format!(
                "This password has appeared in {} known data breaches ❗",
                count
            ),
            BreachStatus::Unavailable => "Breach check unavailable".to_string(),
        }
    }
}

/// Risk band used for coloring the risk meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// Risk score clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Round and clamp the scorer's fractional score.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(Self::MAX);
        }
        Self(raw.round().clamp(0.0, f64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn band(self) -> RiskBand {
        match self.0 {
            70.. => RiskBand::High,
            40.. => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }
}
