//! Data types shared between the check client, the orchestrator and the UI.

mod check;
mod presentation;

pub use check::{BreachCount, CheckOutcome, CheckRequest, CheckResult, PatternMatch};
pub use presentation::{
    BreachStatus, RiskBand, RiskScore, StrengthReport, StrengthTone, CRACK_TIME_ASSUMPTION,
};
