//! Log setup for the binary.
//!
//! The terminal belongs to the UI, so logs go to
//! `<data_local_dir>/pwcheck/pwcheck.log`. `RUST_LOG` overrides the level
//! picked from `-v` flags.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "pwcheck.log";

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("pwcheck"))
}

/// `RUST_LOG` if set and valid, otherwise `default_directive`.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber writing to the log file. Returns the file's
/// path.
pub fn init(default_directive: &str) -> Result<PathBuf> {
    let dir = log_dir().ok_or_else(|| eyre!("could not determine local data directory"))?;
    fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("installing log subscriber: {}", e))?;

    Ok(path)
}
