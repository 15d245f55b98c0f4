//! Command-line argument parsing.

use crate::config::CheckerConfig;
use crate::error::ConfigError;
use crate::orchestrator::ResponseOrdering;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI (default)
    Run(RunOptions),
}

/// Flags that adjust a TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub endpoint: Option<String>,
    pub last_request_wins: bool,
    /// Number of `-v` flags
    pub verbose: u8,
}

impl RunOptions {
    /// Layer the flags over a config loaded from the environment.
    pub fn apply(&self, mut config: CheckerConfig) -> CheckerConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if self.last_request_wins {
            config.ordering = ResponseOrdering::LastRequestWins;
        }
        config
    }

    /// Default log filter for the verbosity level.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "pwcheck=info",
            1 => "pwcheck=debug",
            _ => "pwcheck=trace",
        }
    }
}

/// Parse command-line arguments. The first item is the program name.
///
/// Unknown arguments are ignored. `--version` and `--help` win over
/// everything else.
///
/// # Examples
///
/// ```
/// use pwcheck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pwcheck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--endpoint" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue("--endpoint".to_string()))?;
                options.endpoint = Some(value);
            }
            "--last-request-wins" => options.last_request_wins = true,
            "--verbose" => options.verbose = options.verbose.saturating_add(1),
            other => {
                if let Some(value) = other.strip_prefix("--endpoint=") {
                    if value.is_empty() {
                        return Err(ConfigError::MissingValue("--endpoint".to_string()));
                    }
                    options.endpoint = Some(value.to_string());
                } else if is_verbose_cluster(other) {
                    let count = (other.len() - 1).min(u8::MAX as usize) as u8;
                    options.verbose = options.verbose.saturating_add(count);
                }
            }
        }
    }

    Ok(CliCommand::Run(options))
}

/// `-v`, `-vv`, `-vvv`...
fn is_verbose_cluster(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v')
}
