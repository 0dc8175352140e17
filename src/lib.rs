//! ParkEase Library
//! # Overview
//!
//! This library tracks vehicles in a small fixed-capacity parking lot,
//! computes hourly charges at checkout and appends each checkout to a CSV log.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Vehicle, CheckoutRecord, ParkingError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::vehicle_registry`] - Vehicle validation and construction
//!   - [`core::slot_allocator`] - Slot table, park/remove state machine and charging
//!   - [`core::traits`] - Checkout persistence seam
//! - [`io`] - Checkout history CSV log
//! - [`cli`] - Argument parsing, input validation, rendering and the menu loop
//!
//! # Slot Lifecycle
//!
//! Each slot is either **Empty** or **Occupied**:
//!
//! - **Park**: the vehicle takes the lowest-numbered empty slot
//! - **Remove**: the slot is freed and a checkout record is returned
//!
//! # Charges
//!
//! - 2-wheelers: Rs. 5 per hour
//! - 4-wheelers: Rs. 10 per hour

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{CheckoutSink, SlotAllocator, VehicleRegistry};
pub use io::CsvHistoryLog;
pub use types::{
    CheckoutRecord, Hours, ParkingError, Rupees, SlotNumber, SlotStatus, SlotSummary, Vehicle,
    VehicleCategory, Wheels,
};
