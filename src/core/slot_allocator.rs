//! Slot allocation module
//!
//! This module provides the `SlotAllocator` struct which owns the fixed-size
//! slot table and implements the park/remove state machine.
//!
//! The SlotAllocator is responsible for:
//! - Assigning vehicles to the lowest-numbered empty slot (first fit)
//! - Freeing slots and computing the checkout charge
//! - Keeping the occupancy counter equal to the number of occupied slots
//! - Reporting the status of every slot in order
//!
//! Each slot moves strictly between `Empty` and `Occupied`. Every operation
//! validates first and mutates last, so a failed call leaves the table
//! exactly as it was.

use crate::types::{
    CheckoutRecord, Hours, ParkingError, SlotNumber, SlotStatus, SlotSummary, Vehicle,
};
use tracing::{debug, error, warn};

/// Number of slots in a lot built with [`SlotAllocator::new`]
pub const DEFAULT_CAPACITY: usize = 5;

/// State of one entry in the slot table
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied(Vehicle),
}

/// Owns the slot table for one parking lot
///
/// Slot `n` lives at index `n - 1` for the lifetime of the allocator.
#[derive(Debug, Clone)]
pub struct SlotAllocator {
    /// Slot table, indexed by slot number minus one
    slots: Vec<Slot>,

    /// Number of `Slot::Occupied` entries in `slots`
    occupied: usize,
}

impl SlotAllocator {
    /// Create a lot with [`DEFAULT_CAPACITY`] empty slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a lot with `capacity` empty slots
    pub fn with_capacity(capacity: usize) -> Self {
        SlotAllocator {
            slots: vec![Slot::Empty; capacity],
            occupied: 0,
        }
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a vehicle
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity()
    }

    /// Park a vehicle in the lowest-numbered empty slot
    ///
    /// # Arguments
    ///
    /// * `vehicle` - The vehicle to park, as built by the registry
    ///
    /// # Returns
    ///
    /// * `Ok(SlotNumber)` - The 1-based slot the vehicle now occupies
    /// * `Err(ParkingError)` - If no slot could be assigned
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Every slot is occupied according to the occupancy counter (`LotFull`)
    /// - The counter reports a free slot but the scan finds none (`NoFreeSlot`)
    pub fn park(&mut self, vehicle: Vehicle) -> Result<SlotNumber, ParkingError> {
        if self.is_full() {
            warn!(
                identifier = vehicle.identifier(),
                capacity = self.capacity(),
                "park rejected: lot full"
            );
            return Err(ParkingError::lot_full(self.capacity()));
        }

        let index = self
            .slots
            .iter()
            .position(|slot| matches!(slot, Slot::Empty))
            .ok_or_else(|| {
                error!(
                    occupied = self.occupied,
                    capacity = self.capacity(),
                    "occupancy counter out of sync with slot table"
                );
                ParkingError::no_free_slot(self.occupied, self.capacity())
            })?;

        let slot_number = index + 1;
        debug!(
            slot = slot_number,
            identifier = vehicle.identifier(),
            category = %vehicle.category(),
            "vehicle parked"
        );

        self.slots[index] = Slot::Occupied(vehicle);
        self.occupied += 1;

        Ok(slot_number)
    }

    /// Remove the vehicle in `slot_number` and compute its charge
    ///
    /// The charge is `hourly_rate * hours_parked`, where the hourly rate is
    /// 5 for 2-wheelers and 10 for 4-wheelers. `hours_parked` is taken as
    /// given; zero or negative values are not rejected here.
    ///
    /// # Arguments
    ///
    /// * `slot_number` - The 1-based slot to free
    /// * `hours_parked` - How long the vehicle was parked
    ///
    /// # Returns
    ///
    /// * `Ok(CheckoutRecord)` - The checkout details for display and logging
    /// * `Err(ParkingError)` - If the slot could not be freed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `slot_number` is outside `1..=capacity` (`InvalidSlot`)
    /// - The slot holds no vehicle (`EmptySlot`)
    /// - The charge would overflow (`ChargeOverflow`)
    pub fn remove(
        &mut self,
        slot_number: SlotNumber,
        hours_parked: Hours,
    ) -> Result<CheckoutRecord, ParkingError> {
        let index = self.index_of(slot_number)?;

        let rate = match &self.slots[index] {
            Slot::Occupied(vehicle) => vehicle.category().hourly_rate(),
            Slot::Empty => {
                warn!(slot = slot_number, "remove rejected: slot is empty");
                return Err(ParkingError::empty_slot(slot_number));
            }
        };

        let charge = rate
            .checked_mul(hours_parked)
            .ok_or_else(|| ParkingError::charge_overflow(slot_number, hours_parked))?;

        let vehicle = match std::mem::replace(&mut self.slots[index], Slot::Empty) {
            Slot::Occupied(vehicle) => vehicle,
            Slot::Empty => return Err(ParkingError::empty_slot(slot_number)),
        };
        self.occupied -= 1;

        debug!(
            slot = slot_number,
            identifier = vehicle.identifier(),
            hours = hours_parked,
            charge,
            "vehicle removed"
        );

        Ok(CheckoutRecord {
            slot_number,
            category: vehicle.category(),
            identifier: vehicle.identifier().to_string(),
            hours_parked,
            rate,
            charge,
        })
    }

    /// Status of every slot, in ascending slot-number order
    pub fn describe_slots(&self) -> Vec<SlotSummary> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotSummary {
                number: index + 1,
                status: match slot {
                    Slot::Empty => SlotStatus::Empty,
                    Slot::Occupied(vehicle) => SlotStatus::Occupied {
                        category: vehicle.category(),
                        identifier: vehicle.identifier().to_string(),
                    },
                },
            })
            .collect()
    }

    fn index_of(&self, slot_number: SlotNumber) -> Result<usize, ParkingError> {
        if slot_number == 0 || slot_number > self.capacity() {
            warn!(
                slot = slot_number,
                capacity = self.capacity(),
                "slot number out of range"
            );
            return Err(ParkingError::invalid_slot(slot_number, self.capacity()));
        }
        Ok(slot_number - 1)
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}
