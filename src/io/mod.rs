//! I/O module
//!
//! Handles checkout history persistence.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (row conversion, serialization)
//! - `history_log` - Append-only on-disk checkout log

pub mod csv_format;
pub mod history_log;

pub use csv_format::{write_history_rows, HistoryRow, HISTORY_HEADER};
pub use history_log::{CsvHistoryLog, DEFAULT_HISTORY_FILE};
