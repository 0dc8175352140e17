//! CSV format handling for the checkout history log
//!
//! This module centralizes all CSV format concerns, providing:
//! - HistoryRow structure for serialization
//! - Conversion from checkout records to log rows
//! - History row serialization to any writer
//!
//! All functions are pure (no file handling) for easy testing.

use crate::types::{CheckoutRecord, Hours, Rupees};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use std::io::Write;

/// Header line written once at the top of a new history log
pub const HISTORY_HEADER: &str = "Vehicle Number,Type,Hours Parked,Charge";

/// CSV row structure for serialization
///
/// Matches the log format with columns: Vehicle Number, Type, Hours Parked, Charge.
/// The field renames double as the header row.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HistoryRow<'a> {
    #[serde(rename = "Vehicle Number")]
    pub identifier: &'a str,
    #[serde(rename = "Type")]
    pub category: &'static str,
    #[serde(rename = "Hours Parked")]
    pub hours_parked: Hours,
    #[serde(rename = "Charge")]
    pub charge: Rupees,
}

impl<'a> From<&'a CheckoutRecord> for HistoryRow<'a> {
    fn from(record: &'a CheckoutRecord) -> Self {
        HistoryRow {
            identifier: &record.identifier,
            category: record.category.label(),
            hours_parked: record.hours_parked,
            charge: record.charge,
        }
    }
}

/// Write checkout records as history rows
///
/// # Arguments
///
/// * `records` - Checkout records to write, in order
/// * `output` - Writer to append the rows to
/// * `include_header` - Whether to emit the header line first
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_history_rows(
    records: &[CheckoutRecord],
    output: &mut dyn Write,
    include_header: bool,
) -> Result<(), String> {
    let mut writer = WriterBuilder::new()
        .has_headers(include_header)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    if include_header && records.is_empty() {
        // serde only emits the header alongside the first row
        writer
            .write_record(HISTORY_HEADER.split(','))
            .map_err(|e| format!("Failed to write CSV header: {}", e))?;
    }

    for record in records {
        writer
            .serialize(HistoryRow::from(record))
            .map_err(|e| format!("Failed to write checkout record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
