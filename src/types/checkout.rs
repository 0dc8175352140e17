//! Checkout record produced when a vehicle leaves the lot

use super::slot::SlotNumber;
use super::vehicle::{Rupees, VehicleCategory};

/// Hours parked as entered by the operator
pub type Hours = i64;

/// Result of a successful removal
///
/// Handed to the caller for display and persistence; the allocator keeps
/// no copy once it has been returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRecord {
    /// Slot the vehicle was removed from
    pub slot_number: SlotNumber,

    /// Registration number of the vehicle
    pub identifier: String,

    pub category: VehicleCategory,

    /// Hours parked, taken as given
    pub hours_parked: Hours,

    /// Hourly rate applied (5 for 2-wheelers, 10 for 4-wheelers)
    pub rate: Rupees,

    /// Total charge: `rate * hours_parked`
    pub charge: Rupees,
}
