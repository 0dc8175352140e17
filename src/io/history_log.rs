//! Append-only checkout history log on disk
//!
//! Each checkout becomes one CSV line. The header is written only when the
//! log file does not exist yet; existing content is never rewritten.
//!
//! The file is opened and closed on every append, so the log stays readable
//! (and removable) by other programs between checkouts.

use crate::core::CheckoutSink;
use crate::io::csv_format::write_history_rows;
use crate::types::{CheckoutRecord, ParkingError};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default file name for the checkout log
pub const DEFAULT_HISTORY_FILE: &str = "checkout_history.csv";

/// CSV-backed checkout history
#[derive(Debug, Clone)]
pub struct CsvHistoryLog {
    path: PathBuf,
}

impl CsvHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvHistoryLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckoutSink for CsvHistoryLog {
    /// Append one record, writing the header first if the log is new
    ///
    /// # Errors
    ///
    /// Returns `PersistenceWriteFailed` if the file cannot be opened or
    /// written. Nothing is retried.
    fn append(&mut self, record: &CheckoutRecord) -> Result<(), ParkingError> {
        let is_new = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "failed to open checkout log");
                ParkingError::persistence_write_failed(&self.path, e)
            })?;

        write_history_rows(std::slice::from_ref(record), &mut file, is_new).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to append checkout record");
            ParkingError::persistence_write_failed(&self.path, e)
        })?;

        debug!(
            path = %self.path.display(),
            identifier = %record.identifier,
            header_written = is_new,
            "checkout record appended"
        );

        Ok(())
    }
}
