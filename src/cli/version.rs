//! `--version` and `--help` output.

/// The current version of pwcheck, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn help_text() -> String {
    format!(
        "pwcheck {VERSION}
Check password strength and breach exposure as you type.

USAGE:
    pwcheck [OPTIONS]

OPTIONS:
    --endpoint <URL>       Scoring endpoint (env: PWCHECK_ENDPOINT)
    --last-request-wins    Drop responses for inputs that were since replaced
    -v, --verbose          More log output, repeat for trace
    -V, --version          Print version and exit
    -h, --help             Print this help and exit

ENVIRONMENT:
    PWCHECK_STRENGTH_DELAY_MS     Strength debounce (default 100)
    PWCHECK_BREACH_DELAY_MS       Breach debounce (default 1500)
    PWCHECK_REQUEST_TIMEOUT_SECS  Per-request timeout (default 10)
    PWCHECK_ORDERING              last-response | last-request
    RUST_LOG                      Overrides --verbose"
    )
}

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("pwcheck {}", VERSION);
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("{}", help_text());
    std::process::exit(0)
}
