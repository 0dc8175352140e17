//! Slot-related types for ParkEase
//!
//! These are the read-only views the allocator hands out to presenters.
//! The live slot table itself is private to
//! [`SlotAllocator`](crate::core::SlotAllocator).

use super::vehicle::VehicleCategory;

/// Slot identifier
///
/// 1-based and stable: slot `n` always lives at table index `n - 1`.
pub type SlotNumber = usize;

/// Status of a single slot as reported by `describe_slots`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    /// No vehicle is parked in the slot
    Empty,

    /// A vehicle is parked in the slot
    Occupied {
        category: VehicleCategory,
        identifier: String,
    },
}

impl SlotStatus {
    pub fn is_empty(&self) -> bool {
        matches!(self, SlotStatus::Empty)
    }
}

/// One row of the slot listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary {
    pub number: SlotNumber,
    pub status: SlotStatus,
}
