//! Read-only report handlers (status and the vehicle queries).
//!
//! Reports echo user-supplied arguments (colours, registrations) exactly as
//! typed, even when matching was case-insensitive.

use super::PARKING_LOT_NOT_CREATED;
use crate::commands::output::CommandOutput;
use crate::lot::{ParkingLot, VehicleType};

/// Handle status: a tab-separated table of occupied slots. An empty lot
/// still prints the header, followed by an explicit no-vehicles line.
pub fn handle_status(lot: &Option<ParkingLot>) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };

    let headers = vec![
        "Slot No.".to_string(),
        "Type".to_string(),
        "Registration No".to_string(),
        "Colour".to_string(),
    ];
    let rows: Vec<Vec<String>> = lot
        .status()
        .filter_map(|slot| {
            slot.vehicle().map(|vehicle| {
                vec![
                    slot.number().to_string(),
                    vehicle.vehicle_type.to_string(),
                    vehicle.registration_number.clone(),
                    vehicle.colour.clone(),
                ]
            })
        })
        .collect();

    if rows.is_empty() {
        CommandOutput::multiple(vec![
            CommandOutput::table(headers, rows),
            CommandOutput::info("No vehicles currently parked."),
        ])
    } else {
        CommandOutput::table(headers, rows)
    }
}

/// Handle type_of_vehicles.
pub fn handle_vehicles_of_type(
    lot: &Option<ParkingLot>,
    vehicle_type: VehicleType,
) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };

    let slots: Vec<usize> = lot.slots_with_type(vehicle_type).collect();
    if slots.is_empty() {
        return CommandOutput::info(format!("No {vehicle_type} vehicles found."));
    }

    let mut lines = vec![format!("Slots for {vehicle_type} vehicles:")];
    lines.extend(slots.into_iter().map(|n| format!("Slot No: {n}")));
    CommandOutput::info(lines.join("\n"))
}

/// Handle the odd plate report.
pub fn handle_odd_plates(lot: &Option<ParkingLot>) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };
    plate_report(lot.odd_plate_registrations(), "odd")
}

/// Handle the even plate report.
pub fn handle_even_plates(lot: &Option<ParkingLot>) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };
    plate_report(lot.even_plate_registrations(), "even")
}

// Shared shape of the two parity reports.
fn plate_report<'a>(registrations: impl Iterator<Item = &'a str>, parity: &str) -> CommandOutput {
    let registrations: Vec<&str> = registrations.collect();
    if registrations.is_empty() {
        return CommandOutput::info(format!("No vehicles with {parity} plate numbers found."));
    }

    let mut lines = vec![format!("Vehicles with {parity} plate numbers:")];
    lines.extend(registrations.into_iter().map(String::from));
    CommandOutput::info(lines.join("\n"))
}

/// Handle slot_numbers_for_vehicle_with_colour.
pub fn handle_slots_by_colour(lot: &Option<ParkingLot>, colour: &str) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };

    let slots: Vec<usize> = lot.slots_with_colour(colour).collect();
    if slots.is_empty() {
        return CommandOutput::info(format!("No vehicles with color {colour} found."));
    }

    let mut lines = vec![format!("Slots for vehicles with color {colour}:")];
    lines.extend(slots.into_iter().map(|n| format!("Slot No: {n}")));
    CommandOutput::info(lines.join("\n"))
}

/// Handle slot_number_for_registration_number.
pub fn handle_slot_by_registration(
    lot: &Option<ParkingLot>,
    registration_number: &str,
) -> CommandOutput {
    let Some(lot) = lot else {
        return CommandOutput::error(PARKING_LOT_NOT_CREATED);
    };

    match lot.slot_of_registration(registration_number) {
        Some(slot_number) => CommandOutput::info(format!(
            "Vehicle with registration number {registration_number} is in slot {slot_number}."
        )),
        None => CommandOutput::info(format!(
            "No vehicle found with registration number {registration_number}."
        )),
    }
}
