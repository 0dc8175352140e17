//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `vehicle`: Vehicle records and their derived category
//! - `slot`: Slot identifiers and read-only slot status views
//! - `checkout`: Checkout records emitted on removal
//! - `error`: Error types for the parking lot

pub mod checkout;
pub mod error;
pub mod slot;
pub mod vehicle;

pub use checkout::{CheckoutRecord, Hours};
pub use error::ParkingError;
pub use slot::{SlotNumber, SlotStatus, SlotSummary};
pub use vehicle::{Rupees, Vehicle, VehicleCategory, Wheels};
