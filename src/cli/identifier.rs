//! Registration number validation
//!
//! Accepted forms, after trimming and uppercasing:
//! - 3 or 4 digits (`123`, `1223`)
//! - state code, district, series and number separated by single spaces
//!   (`KA 01 B 1234`, `KA 02 BA 1332`)

use crate::types::ParkingError;
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3,4}|[A-Z]{2} \d{2} [A-Z]{1,2} \d{4})$")
        .expect("identifier pattern is a valid regex")
});

/// Normalize and validate a registration number typed by the operator
///
/// # Errors
///
/// Returns `InvalidIdentifier` carrying the raw input if it does not match
/// an accepted form.
pub fn normalize_identifier(raw: &str) -> Result<String, ParkingError> {
    let normalized = raw.trim().to_uppercase();
    if IDENTIFIER_PATTERN.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(ParkingError::invalid_identifier(raw.trim()))
    }
}
