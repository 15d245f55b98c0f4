//! Error types for pwcheck.
//!
//! - [`CheckError`]: a single check request against the scoring endpoint failed
//! - [`ConfigError`]: configuration from the environment or the command line is invalid
//!
//! Check errors never escape the orchestrator: the strength channel logs them
//! and keeps its previous render, the breach channel turns them into an
//! unavailable status.

mod check;
mod config;

pub use check::CheckError;
pub use config::ConfigError;
