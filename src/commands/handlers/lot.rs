//! Lot mutation handlers (create_parking_lot, park, leave).

use tracing::info;

use super::PARKING_LOT_NOT_CREATED;
use crate::commands::output::CommandOutput;
use crate::lot::{ParkingLot, VehicleType};

/// Handle create_parking_lot. Replaces any existing lot, discarding its
/// vehicles.
pub fn handle_create(lot: &mut Option<ParkingLot>, capacity: usize) -> CommandOutput {
    match ParkingLot::new(capacity) {
        Ok(new_lot) => {
            if lot.replace(new_lot).is_some() {
                info!(capacity, "replaced parking lot");
            } else {
                info!(capacity, "created parking lot");
            }
            CommandOutput::info(format!("Created a parking lot with {capacity} slots."))
        }
        Err(e) => CommandOutput::error(e.to_string()),
    }
}

/// Handle park.
pub fn handle_park(
    lot: &mut Option<ParkingLot>,
    registration_number: String,
    colour: String,
    vehicle_type: VehicleType,
) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };

    match lot.park(registration_number, colour, vehicle_type) {
        Ok(slot_number) => {
            info!(slot_number, "vehicle parked");
            CommandOutput::info(format!("Allocated slot number: {slot_number}"))
        }
        Err(e) => CommandOutput::error(e.to_string()),
    }
}

/// Handle leave.
pub fn handle_leave(lot: &mut Option<ParkingLot>, slot_number: i64) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };

    match lot.leave(slot_number) {
        Ok(()) => {
            info!(slot_number, "slot freed");
            CommandOutput::info(format!("Slot number {slot_number} is free."))
        }
        Err(e) => CommandOutput::error(e.to_string()),
    }
}
