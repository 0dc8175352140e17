// CLI module
// Command-line arguments, input validation, rendering and the menu loop

mod args;
pub mod identifier;
pub mod presenter;
pub mod session;

pub use args::CliArgs;
pub use identifier::normalize_identifier;
pub use session::{MenuChoice, Session};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown flag, bad value) or `--help` is given, clap
/// prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
