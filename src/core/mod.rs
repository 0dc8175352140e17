//! Core business logic module
//!
//! This module contains the slot-allocation components:
//! - `traits` - Trait abstraction for checkout persistence
//! - `vehicle_registry` - Vehicle validation and construction
//! - `slot_allocator` - Slot table ownership, park/remove state machine and charging

pub mod slot_allocator;
pub mod traits;
pub mod vehicle_registry;

pub use slot_allocator::{SlotAllocator, DEFAULT_CAPACITY};
pub use traits::CheckoutSink;
pub use vehicle_registry::VehicleRegistry;
