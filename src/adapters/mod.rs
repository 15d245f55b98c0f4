//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//!
//! The [`mock`] submodule holds the test doubles.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockChecker, MockHttpClient, RecordingSinks};
pub use reqwest_http::ReqwestHttpClient;
