//! Test doubles.
//!
//! - [`MockHttpClient`] - canned HTTP responses
//! - [`MockChecker`] - scripted check results with optional latency
//! - [`RecordingSinks`] - records every sink call

pub mod checker;
pub mod http;
pub mod sinks;

pub use checker::MockChecker;
pub use http::{MockHttpClient, RecordedRequest};
pub use sinks::{RecordingSinks, SinkEvent};
