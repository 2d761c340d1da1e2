//! The slot registry: a fixed pool of numbered parking slots.
//!
//! [`ParkingLot`] owns all slot and vehicle state and is the only mutation
//! surface. It never reads input or prints; every operation returns typed
//! results for the command layer to render.

use thiserror::Error;

use super::vehicle::{Vehicle, VehicleType};

/// Domain errors returned by registry operations.
///
/// The `Display` text is the exact line the command layer prints, so
/// handlers render expected failures straight from the error value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LotError {
    /// Requested capacity was zero.
    #[error("Invalid number of slots. Please provide a positive integer.")]
    InvalidCapacity,

    /// Every slot is occupied.
    #[error("Sorry, parking lot is full.")]
    Full,

    /// Slot number outside `1..=capacity`.
    #[error("Invalid slot number.")]
    InvalidSlot,

    /// The slot exists but holds no vehicle.
    #[error("Slot number {0} is already free.")]
    AlreadyFree(usize),
}

/// A single numbered parking space.
#[derive(Debug, Clone)]
pub struct Slot {
    number: usize,
    vehicle: Option<Vehicle>,
}

impl Slot {
    fn new(number: usize) -> Self {
        Self {
            number,
            vehicle: None,
        }
    }

    /// Slot number, 1-based and stable for the registry's lifetime.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The occupying vehicle, if any.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Whether a vehicle currently occupies this slot.
    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }
}

/// Fixed-size, in-memory slot registry.
///
/// Slots are numbered `1..=capacity` and the set never changes after
/// creation. Allocation is first-fit: the lowest-numbered empty slot always
/// wins, so assignments are deterministic for a given command sequence.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    slots: Vec<Slot>,
}

impl ParkingLot {
    /// Creates a lot with `capacity` empty slots numbered `1..=capacity`.
    pub fn new(capacity: usize) -> Result<Self, LotError> {
        if capacity == 0 {
            return Err(LotError::InvalidCapacity);
        }
        Ok(Self {
            slots: (1..=capacity).map(Slot::new).collect(),
        })
    }

    /// Number of slots; fixed at creation.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The slot with the given 1-based number.
    pub fn slot(&self, slot_number: usize) -> Option<&Slot> {
        slot_number.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    /// Parks a vehicle in the lowest-numbered empty slot and returns that
    /// slot's number.
    ///
    /// Returns [`LotError::Full`] and changes nothing when no slot is free.
    pub fn park(
        &mut self,
        registration_number: impl Into<String>,
        colour: impl Into<String>,
        vehicle_type: VehicleType,
    ) -> Result<usize, LotError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| !slot.is_occupied())
            .ok_or(LotError::Full)?;
        slot.vehicle = Some(Vehicle::new(registration_number, colour, vehicle_type));
        Ok(slot.number)
    }

    /// Frees the given slot, dropping its vehicle.
    ///
    /// Takes the raw number from the command line: anything outside
    /// `1..=capacity`, including zero and negatives, is
    /// [`LotError::InvalidSlot`]. Freeing an empty slot is the non-fatal
    /// [`LotError::AlreadyFree`].
    pub fn leave(&mut self, slot_number: i64) -> Result<(), LotError> {
        let index = usize::try_from(slot_number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < self.slots.len())
            .ok_or(LotError::InvalidSlot)?;
        let slot = &mut self.slots[index];
        if slot.vehicle.is_none() {
            return Err(LotError::AlreadyFree(slot.number));
        }
        slot.vehicle = None;
        Ok(())
    }

    /// Occupied slots in ascending slot-number order.
    ///
    /// Lazy and restartable: each call iterates the current state afresh.
    pub fn status(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|slot| slot.is_occupied())
    }

    /// Occupied slot numbers holding the given vehicle type, ascending.
    pub fn slots_with_type(&self, vehicle_type: VehicleType) -> impl Iterator<Item = usize> + '_ {
        self.occupied()
            .filter(move |(_, vehicle)| vehicle.vehicle_type == vehicle_type)
            .map(|(number, _)| number)
    }

    /// Registrations with odd numeric plates, in ascending slot order.
    pub fn odd_plate_registrations(&self) -> impl Iterator<Item = &str> {
        self.plate_registrations(|n| n % 2 != 0)
    }

    /// Registrations with even numeric plates, in ascending slot order.
    pub fn even_plate_registrations(&self) -> impl Iterator<Item = &str> {
        self.plate_registrations(|n| n % 2 == 0)
    }

    /// Occupied slot numbers whose vehicle colour matches, ascending.
    /// Matching is case-insensitive; the stored colour is not normalized.
    pub fn slots_with_colour<'a>(&'a self, colour: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.occupied()
            .filter(move |(_, vehicle)| vehicle.colour.eq_ignore_ascii_case(colour))
            .map(|(number, _)| number)
    }

    /// Slot holding the given registration, matched case-insensitively.
    /// When registrations are duplicated, the lowest slot number wins.
    pub fn slot_of_registration(&self, registration_number: &str) -> Option<usize> {
        self.occupied()
            .find(|(_, vehicle)| {
                vehicle
                    .registration_number
                    .eq_ignore_ascii_case(registration_number)
            })
            .map(|(number, _)| number)
    }

    // (slot number, vehicle) pairs for occupied slots, ascending.
    fn occupied(&self) -> impl Iterator<Item = (usize, &Vehicle)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.vehicle().map(|vehicle| (slot.number, vehicle)))
    }

    // Registrations whose numeric plate satisfies the parity predicate.
    // Non-numeric registrations appear in neither parity report.
    fn plate_registrations(&self, parity: fn(i64) -> bool) -> impl Iterator<Item = &str> {
        self.occupied()
            .filter(move |(_, vehicle)| vehicle.plate_number().is_some_and(parity))
            .map(|(_, vehicle)| vehicle.registration_number.as_str())
    }
}
