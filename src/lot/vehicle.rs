//! Vehicle values parked in the lot.

use std::fmt;
use std::str::FromStr;

/// Category of vehicle a slot can hold.
///
/// The set is closed: command parsing maps user tokens onto these two cases
/// and nothing downstream ever handles a third.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Motorcycle,
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            _ => Err(format!(
                "Invalid vehicle type: {s}. Expected: car or motorcycle"
            )),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "Car"),
            Self::Motorcycle => write!(f, "Motorcycle"),
        }
    }
}

/// A parked vehicle.
///
/// Immutable once created; owned exclusively by the slot it occupies and
/// dropped when that slot is freed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    /// Registration number exactly as given at park time.
    pub registration_number: String,
    /// Colour exactly as given at park time; matched case-insensitively.
    pub colour: String,
    /// Vehicle category.
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    /// Creates a vehicle value.
    pub fn new(
        registration_number: impl Into<String>,
        colour: impl Into<String>,
        vehicle_type: VehicleType,
    ) -> Self {
        Self {
            registration_number: registration_number.into(),
            colour: colour.into(),
            vehicle_type,
        }
    }

    /// The registration as a number, when the whole string parses as one.
    ///
    /// Registrations that do not parse have no parity and are invisible to
    /// the odd/even plate reports.
    pub fn plate_number(&self) -> Option<i64> {
        self.registration_number.parse().ok()
    }
}
