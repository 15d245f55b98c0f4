//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport (GET, POST)
//! - [`PasswordChecker`] - the scoring/breach endpoint
//! - [`StrengthSink`], [`BreachSink`], [`RiskSink`] - presentation sinks

pub mod checker;
pub mod http;
pub mod sinks;

pub use checker::PasswordChecker;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use sinks::{BreachSink, PresentationSinks, RiskSink, StrengthSink};
