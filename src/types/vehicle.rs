//! Vehicle-related types for ParkEase
//!
//! This module defines the Vehicle record and its derived category.
//! A vehicle is only ever constructed through
//! [`VehicleRegistry::create_vehicle`](crate::core::VehicleRegistry::create_vehicle),
//! which guarantees the wheel count is 2 or 4.

use std::fmt;

/// Wheel count as entered by the operator
///
/// Signed so that nonsense input (e.g. `-2`) reaches the registry and is
/// rejected there with a proper error instead of failing to parse.
pub type Wheels = i64;

/// Amount in rupees
pub type Rupees = i64;

/// Vehicle category, derived purely from wheel count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    /// Vehicles with exactly 2 wheels
    TwoWheeler,

    /// Vehicles with exactly 4 wheels
    FourWheeler,
}

impl VehicleCategory {
    /// Derive the category from a wheel count
    ///
    /// Returns `None` for anything other than 2 or 4.
    pub fn from_wheels(wheels: Wheels) -> Option<Self> {
        match wheels {
            2 => Some(VehicleCategory::TwoWheeler),
            4 => Some(VehicleCategory::FourWheeler),
            _ => None,
        }
    }

    /// Number of wheels for this category
    pub fn wheels(self) -> Wheels {
        match self {
            VehicleCategory::TwoWheeler => 2,
            VehicleCategory::FourWheeler => 4,
        }
    }

    /// Flat hourly parking rate in rupees
    pub fn hourly_rate(self) -> Rupees {
        match self {
            VehicleCategory::TwoWheeler => 5,
            VehicleCategory::FourWheeler => 10,
        }
    }

    /// Human-readable label used in slot listings and the checkout log
    pub fn label(self) -> &'static str {
        match self {
            VehicleCategory::TwoWheeler => "2-Wheeler",
            VehicleCategory::FourWheeler => "4-Wheeler",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parked vehicle
///
/// Immutable once created. Owned by the slot that holds it and dropped
/// when that slot is freed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    identifier: String,
    category: VehicleCategory,
}

impl Vehicle {
    pub(crate) fn new(identifier: String, category: VehicleCategory) -> Self {
        Vehicle {
            identifier,
            category,
        }
    }

    /// Registration number, already normalized by the input layer
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn wheels(&self) -> Wheels {
        self.category.wheels()
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}
