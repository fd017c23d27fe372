//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Delete the saved gallery snapshot and exit
    ClearState,
    /// Run the TUI (default). `fresh` skips restoring the saved snapshot.
    Run { fresh: bool },
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown arguments are ignored. Informational flags win over `--fresh`.
///
/// # Examples
///
/// ```
/// use giftrend::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["giftrend".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut fresh = false;
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--clear-state" => return CliCommand::ClearState,
            "--fresh" => fresh = true,
            _ => {}
        }
    }
    CliCommand::Run { fresh }
}

pub const USAGE: &str = "\
giftrend - browse trending GIFs in the terminal

USAGE:
    giftrend [--fresh]
    giftrend --clear-state
    giftrend --version | --help

OPTIONS:
    --fresh          Start with an empty gallery instead of the saved one
    --clear-state    Delete the saved gallery and exit
    -V, --version    Print version
    -h, --help       Print this help

ENVIRONMENT:
    GIFTREND_API_KEY     Giphy API key (required)
    GIFTREND_BASE_URL    API base URL (default https://api.giphy.com)
    GIFTREND_PAGE_SIZE   Items per page, 1-50 (default 20)
    GIFTREND_LOG         Log file path
    GIFTREND_STATE       Saved gallery path
    RUST_LOG             Log filter (default info)

KEYS:
    j/k, arrows      Move selection (h/l in grid mode)
    PgUp/PgDn        Move by a screen
    g/G, Home/End    Jump to first/last
    o, Enter         Open selected GIF
    r                Retry after a failure
    q, Esc           Quit
";
