//! CLI front end.
//!
//! Called early in `main()`, before the terminal is put into raw mode:
//!
//! ```ignore
//! use giftrend::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Run { fresh } => run_tui(fresh),
//!     other => run_cli_command(other, &config),
//! }
//! ```

pub mod args;

pub use args::{parse_args, CliCommand, USAGE};

/// Crate version, as printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
