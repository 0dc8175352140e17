//! Vehicle construction and validation
//!
//! The registry is the only way to obtain a [`Vehicle`]. Registration number
//! format is checked by the input layer before this point; the registry
//! owns the wheel-count rule.

use crate::types::{ParkingError, Vehicle, VehicleCategory, Wheels};
use tracing::warn;

/// Validates raw input and builds vehicle records
#[derive(Debug, Default, Clone, Copy)]
pub struct VehicleRegistry;

impl VehicleRegistry {
    /// Create a vehicle from a registration number and wheel count
    ///
    /// # Errors
    ///
    /// Returns `InvalidWheelCount` unless `wheels` is exactly 2 or 4.
    pub fn create_vehicle(
        identifier: impl Into<String>,
        wheels: Wheels,
    ) -> Result<Vehicle, ParkingError> {
        let category = VehicleCategory::from_wheels(wheels).ok_or_else(|| {
            warn!(wheels, "rejected vehicle with unsupported wheel count");
            ParkingError::invalid_wheel_count(wheels)
        })?;

        Ok(Vehicle::new(identifier.into(), category))
    }
}
