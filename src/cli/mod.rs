//! Command-line interface: argument parsing, `--version` and `--help`.
//!
//! Called at the top of `main()`, before the terminal is touched:
//!
//! ```ignore
//! use pwcheck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let options = run_cli_command(command);
//! // continue to the TUI with `options`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, help_text, VERSION};

/// Handle informational commands.
///
/// `Version` and `Help` print and exit the process. `Run` hands its options
/// back to the caller.
pub fn run_cli_command(command: CliCommand) -> RunOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => options,
    }
}
