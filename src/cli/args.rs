use crate::io::DEFAULT_HISTORY_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Track vehicles in a small parking lot and log checkouts
#[derive(Parser, Debug)]
#[command(name = "parkease")]
#[command(about = "Console parking-lot tracker with hourly charges", long_about = None)]
pub struct CliArgs {
    /// Checkout history log
    #[arg(
        long = "history",
        value_name = "PATH",
        default_value = DEFAULT_HISTORY_FILE,
        help = "CSV file checkout records are appended to"
    )]
    pub history_file: PathBuf,

    /// Tracing filter for diagnostics on stderr
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter, e.g. 'warn', 'debug' or 'parkease=trace'"
    )]
    pub log_level: String,
}
