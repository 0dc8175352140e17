//! Core traits for checkout persistence
//!
//! This module defines the seam between the slot allocator's output and
//! whatever stores checkout history, so the menu loop can be driven against
//! the on-disk CSV log or an in-memory buffer interchangeably.

use crate::types::{CheckoutRecord, ParkingError};

/// Trait for persisting checkout records
///
/// Implementations append; they never rewrite records already stored.
pub trait CheckoutSink {
    /// Append one checkout record
    fn append(&mut self, record: &CheckoutRecord) -> Result<(), ParkingError>;
}

/// In-memory history, used by tests and embedders that don't need a file
impl CheckoutSink for Vec<CheckoutRecord> {
    fn append(&mut self, record: &CheckoutRecord) -> Result<(), ParkingError> {
        self.push(record.clone());
        Ok(())
    }
}

impl<T: CheckoutSink + ?Sized> CheckoutSink for &mut T {
    fn append(&mut self, record: &CheckoutRecord) -> Result<(), ParkingError> {
        (**self).append(record)
    }
}
