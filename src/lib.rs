//! pwcheck - a terminal password-quality checker
//!
//! As the password is typed, a short-debounce channel fetches strength
//! feedback and a long-debounce channel looks the password up in breach
//! data, with a session cache in front of the breach lookups. See
//! [`orchestrator::InputOrchestrator`].
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod terminal;
pub mod traits;
pub mod ui;
