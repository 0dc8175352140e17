//! ParkEase CLI
//!
//! Interactive console for a small parking lot.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --history /var/lib/parkease/history.csv
//! cargo run -- --log-level debug
//! ```
//!
//! The program shows a numbered menu (park, remove, display, exit) on stdout
//! and reads answers from stdin. Each checkout is appended to the history CSV.
//! Diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Operator chose Exit, or input ended
//! - 1: Terminal I/O failed

use parkease::cli::{self, Session};
use parkease::{CsvHistoryLog, SlotAllocator};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    // Initialize logging on stderr so it never mixes with the menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    let allocator = SlotAllocator::new();
    let history = CsvHistoryLog::new(&args.history_file);

    let stdin = io::stdin();
    let mut session = Session::new(allocator, history, stdin.lock(), io::stdout());
    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
