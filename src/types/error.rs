//! Error types for ParkEase
//!
//! This module defines all error types that can occur while operating the lot.
//! Errors are designed to be descriptive and user-friendly for console output.
//!
//! # Error Categories
//!
//! - **Input Errors**: Bad wheel count, malformed registration number, non-numeric answers
//! - **Allocation Errors**: Lot full, slot out of range, slot already empty
//! - **Consistency Faults**: Occupancy counter disagrees with the slot table
//! - **I/O Errors**: Checkout log could not be written, terminal I/O failed
//!
//! None of these are fatal to an interactive session; the menu loop prints
//! the message and returns to the menu.

use super::checkout::Hours;
use super::slot::SlotNumber;
use super::vehicle::Wheels;
use std::path::Path;
use thiserror::Error;

/// Main error type for the parking lot
///
/// Each variant carries enough context to produce the message shown to
/// the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    /// Wheel count other than 2 or 4
    ///
    /// The vehicle is not created and the slot table is untouched.
    #[error("Only 2 or 4 wheelers allowed (got {wheels})")]
    InvalidWheelCount {
        /// The rejected wheel count
        wheels: Wheels,
    },

    /// Registration number does not match an accepted format
    ///
    /// Raised by the input layer before the core is ever called.
    #[error("Invalid vehicle number format: '{input}'")]
    InvalidIdentifier {
        /// The raw input as typed
        input: String,
    },

    /// Numeric prompt answered with something that is not a usable number
    ///
    /// Raised by the input layer; the current menu action is abandoned.
    #[error("Invalid {field}: '{input}'")]
    InvalidNumber {
        /// What was being asked for
        field: String,
        /// The raw input as typed
        input: String,
    },

    /// Every slot is occupied
    #[error("Parking lot full ({capacity} of {capacity} slots occupied)")]
    LotFull {
        /// Total number of slots in the lot
        capacity: usize,
    },

    /// Occupancy counter said a slot was free but none was found
    ///
    /// Indicates a bookkeeping bug. Should be unreachable.
    #[error("No empty slots found (occupancy counter reports {occupied} of {capacity})")]
    NoFreeSlot {
        occupied: usize,
        capacity: usize,
    },

    /// Slot number outside `1..=capacity`
    #[error("Invalid slot {slot}: choose a slot between 1 and {capacity}")]
    InvalidSlot {
        slot: SlotNumber,
        capacity: usize,
    },

    /// Slot exists but holds no vehicle
    #[error("Slot {slot} is empty")]
    EmptySlot { slot: SlotNumber },

    /// `rate * hours` does not fit in the charge type
    ///
    /// The vehicle stays parked.
    #[error("Charge for {hours} hours in slot {slot} is too large to compute")]
    ChargeOverflow { slot: SlotNumber, hours: Hours },

    /// Checkout record could not be appended to the history log
    ///
    /// The slot has already been freed by the time this is reported.
    #[error("Could not write to {path}: {message}. Please close the file if it's open and try again")]
    PersistenceWriteFailed {
        /// Path of the checkout log
        path: String,
        /// Description of the underlying failure
        message: String,
    },

    /// Terminal I/O error (reading the menu input or writing prompts)
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to ParkingError
impl From<std::io::Error> for ParkingError {
    fn from(error: std::io::Error) -> Self {
        ParkingError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ParkingError {
    /// Create an InvalidWheelCount error
    pub fn invalid_wheel_count(wheels: Wheels) -> Self {
        ParkingError::InvalidWheelCount { wheels }
    }

    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(input: &str) -> Self {
        ParkingError::InvalidIdentifier {
            input: input.to_string(),
        }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(field: &str, input: &str) -> Self {
        ParkingError::InvalidNumber {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Create a LotFull error
    pub fn lot_full(capacity: usize) -> Self {
        ParkingError::LotFull { capacity }
    }

    /// Create a NoFreeSlot error
    pub fn no_free_slot(occupied: usize, capacity: usize) -> Self {
        ParkingError::NoFreeSlot { occupied, capacity }
    }

    /// Create an InvalidSlot error
    pub fn invalid_slot(slot: SlotNumber, capacity: usize) -> Self {
        ParkingError::InvalidSlot { slot, capacity }
    }

    /// Create an EmptySlot error
    pub fn empty_slot(slot: SlotNumber) -> Self {
        ParkingError::EmptySlot { slot }
    }

    /// Create a ChargeOverflow error
    pub fn charge_overflow(slot: SlotNumber, hours: Hours) -> Self {
        ParkingError::ChargeOverflow { slot, hours }
    }

    /// Create a PersistenceWriteFailed error
    pub fn persistence_write_failed(path: &Path, message: impl ToString) -> Self {
        ParkingError::PersistenceWriteFailed {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_wheel_count(
        ParkingError::InvalidWheelCount { wheels: 3 },
        "Only 2 or 4 wheelers allowed (got 3)"
    )]
    #[case::invalid_identifier(
        ParkingError::InvalidIdentifier { input: "AB12".to_string() },
        "Invalid vehicle number format: 'AB12'"
    )]
    #[case::invalid_number(
        ParkingError::InvalidNumber { field: "hours parked".to_string(), input: "-3".to_string() },
        "Invalid hours parked: '-3'"
    )]
    #[case::lot_full(
        ParkingError::LotFull { capacity: 5 },
        "Parking lot full (5 of 5 slots occupied)"
    )]
    #[case::no_free_slot(
        ParkingError::NoFreeSlot { occupied: 4, capacity: 5 },
        "No empty slots found (occupancy counter reports 4 of 5)"
    )]
    #[case::invalid_slot(
        ParkingError::InvalidSlot { slot: 9, capacity: 5 },
        "Invalid slot 9: choose a slot between 1 and 5"
    )]
    #[case::empty_slot(
        ParkingError::EmptySlot { slot: 2 },
        "Slot 2 is empty"
    )]
    #[case::charge_overflow(
        ParkingError::ChargeOverflow { slot: 1, hours: i64::MAX },
        "Charge for 9223372036854775807 hours in slot 1 is too large to compute"
    )]
    #[case::persistence_write_failed(
        ParkingError::PersistenceWriteFailed { path: "history.csv".to_string(), message: "Permission denied".to_string() },
        "Could not write to history.csv: Permission denied. Please close the file if it's open and try again"
    )]
    #[case::io_error(
        ParkingError::IoError { message: "broken pipe".to_string() },
        "I/O error: broken pipe"
    )]
    fn test_error_display(#[case] error: ParkingError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_wheel_count(
        ParkingError::invalid_wheel_count(6),
        ParkingError::InvalidWheelCount { wheels: 6 }
    )]
    #[case::lot_full(ParkingError::lot_full(5), ParkingError::LotFull { capacity: 5 })]
    #[case::invalid_slot(
        ParkingError::invalid_slot(0, 5),
        ParkingError::InvalidSlot { slot: 0, capacity: 5 }
    )]
    #[case::empty_slot(ParkingError::empty_slot(3), ParkingError::EmptySlot { slot: 3 })]
    #[case::persistence_write_failed(
        ParkingError::persistence_write_failed(Path::new("log.csv"), "disk full"),
        ParkingError::PersistenceWriteFailed { path: "log.csv".to_string(), message: "disk full".to_string() }
    )]
    fn test_helper_functions(#[case] result: ParkingError, #[case] expected: ParkingError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let error: ParkingError = io_error.into();
        assert!(matches!(error, ParkingError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: broken pipe");
    }
}
