//! Full-session protocol tests.
//!
//! Each test feeds command lines to a [`Session`] and checks the rendered
//! transcript line by line, exactly as an interactive run would print it.

use parkade::commands::COMMANDS;
use parkade::session::Session;
use pretty_assertions::assert_eq;

/// Runs every input through one fresh session and collects the transcript.
fn run_session(inputs: &[&str]) -> Vec<String> {
    let mut session = Session::new();
    inputs
        .iter()
        .flat_map(|input| session.execute(input).render_lines())
        .collect()
}

#[test]
fn test_full_lifecycle_transcript() {
    let transcript = run_session(&[
        "create_parking_lot 6",
        "park KA-01-HH-1234 White car",
        "park KA-01-HH-9999 White car",
        "park KA-01-BB-0001 Black motorcycle",
        "park KA-01-HH-7777 Red car",
        "park KA-01-HH-2701 Blue car",
        "park KA-01-HH-3141 Black motorcycle",
        "leave 4",
        "status",
        "park KA-01-P-333 White car",
        "park DL-12-AA-9999 White car",
        "slot_numbers_for_vehicle_with_colour White",
        "slot_number_for_registration_number KA-01-HH-3141",
        "slot_number_for_registration_number MH-04-AY-1111",
    ]);

    assert_eq!(
        transcript,
        vec![
            "Created a parking lot with 6 slots.",
            "Allocated slot number: 1",
            "Allocated slot number: 2",
            "Allocated slot number: 3",
            "Allocated slot number: 4",
            "Allocated slot number: 5",
            "Allocated slot number: 6",
            "Slot number 4 is free.",
            "Slot No.\tType\tRegistration No\tColour",
            "1\tCar\tKA-01-HH-1234\tWhite",
            "2\tCar\tKA-01-HH-9999\tWhite",
            "3\tMotorcycle\tKA-01-BB-0001\tBlack",
            "5\tCar\tKA-01-HH-2701\tBlue",
            "6\tMotorcycle\tKA-01-HH-3141\tBlack",
            "Allocated slot number: 4",
            "Sorry, parking lot is full.",
            "Slots for vehicles with color White:",
            "Slot No: 1",
            "Slot No: 2",
            "Slot No: 4",
            "Vehicle with registration number KA-01-HH-3141 is in slot 6.",
            "No vehicle found with registration number MH-04-AY-1111.",
        ]
    );
}

#[test]
fn test_lot_commands_refused_before_create() {
    // Malformed lines included: the missing-lot answer outranks shape errors.
    let inputs = [
        "park KA-01 White car",
        "park KA-01",
        "park KA-01 White truck",
        "leave 1",
        "leave abc",
        "status",
        "type_of_vehicles car",
        "type_of_vehicles bus",
        "registration_numbers_for_vehicle_with_odd_plate",
        "registration_numbers_for_vehicle_with_even_plate",
        "slot_numbers_for_vehicle_with_colour White",
        "slot_numbers_for_vehicle_with_colour",
        "slot_number_for_registration_number KA-01",
    ];

    let expected: Vec<String> = inputs
        .iter()
        .map(|_| "Parking lot not created yet.".to_string())
        .collect();
    assert_eq!(run_session(&inputs), expected);
}

#[test]
fn test_recreating_the_lot_discards_old_state() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 2",
            "park KA-01 White car",
            "create_parking_lot 3",
            "status",
            "park KA-02 Black car",
        ]),
        vec![
            "Created a parking lot with 2 slots.",
            "Allocated slot number: 1",
            "Created a parking lot with 3 slots.",
            "Slot No.\tType\tRegistration No\tColour",
            "No vehicles currently parked.",
            "Allocated slot number: 1",
        ]
    );
}

#[test]
fn test_exact_rejection_lines() {
    let cases = [
        ("create_parking_lot", "Invalid number of slots. Please provide a positive integer."),
        ("create_parking_lot 0", "Invalid number of slots. Please provide a positive integer."),
        ("create_parking_lot ten", "Invalid number of slots. Please provide a positive integer."),
        (
            "park KA-01 White",
            "Invalid park command. Format: park <registration_number> <color> <vehicle_type>",
        ),
        ("park KA-01 White bus", "Invalid vehicle type. It must be either 'car' or 'motorcycle'."),
        ("leave one", "Invalid leave command. Format: leave <slot_number>"),
        ("leave", "Invalid leave command. Format: leave <slot_number>"),
        ("type_of_vehicles", "Invalid vehicle type. It must be either 'car' or 'motorcycle'."),
        ("type_of_vehicles bus", "Invalid vehicle type. It must be either 'car' or 'motorcycle'."),
        (
            "slot_numbers_for_vehicle_with_colour",
            "Invalid command. Format: slot_numbers_for_vehicle_with_colour <colour>",
        ),
        (
            "slot_number_for_registration_number",
            "Invalid command. Format: slot_number_for_registration_number <registration_number>",
        ),
        ("wibble", "Unknown command. Please try again."),
        ("", "Invalid command. Please try again."),
    ];

    let mut session = Session::new();
    session.execute("create_parking_lot 1");
    for (input, expected) in cases {
        assert_eq!(
            session.execute(input).render_lines(),
            vec![expected],
            "input: {input:?}"
        );
    }
}

#[test]
fn test_oversized_slot_count_is_rejected() {
    // A count past the 32-bit range never reaches slot allocation; the
    // session answers with the usual rejection and keeps going.
    assert_eq!(
        run_session(&[
            "create_parking_lot 9999999999999999",
            "create_parking_lot 2",
            "park KA-01 White car",
        ]),
        vec![
            "Invalid number of slots. Please provide a positive integer.",
            "Created a parking lot with 2 slots.",
            "Allocated slot number: 1",
        ]
    );
}

#[test]
fn test_rejected_lines_leave_state_untouched() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 2",
            "park KA-01 White car",
            "park KA-02 Black",
            "leave zero",
            "create_parking_lot -1",
            "status",
        ]),
        vec![
            "Created a parking lot with 2 slots.",
            "Allocated slot number: 1",
            "Invalid park command. Format: park <registration_number> <color> <vehicle_type>",
            "Invalid leave command. Format: leave <slot_number>",
            "Invalid number of slots. Please provide a positive integer.",
            "Slot No.\tType\tRegistration No\tColour",
            "1\tCar\tKA-01\tWhite",
        ]
    );
}

#[test]
fn test_leave_edge_cases_in_session() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 2",
            "park KA-01 White car",
            "leave 2",
            "leave 3",
            "leave -1",
            "leave 1",
            "leave 1",
        ]),
        vec![
            "Created a parking lot with 2 slots.",
            "Allocated slot number: 1",
            "Slot number 2 is already free.",
            "Invalid slot number.",
            "Invalid slot number.",
            "Slot number 1 is free.",
            "Slot number 1 is already free.",
        ]
    );
}

#[test]
fn test_colour_report_echoes_query_spelling() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 3",
            "park KA-01 White car",
            "park KA-02 white motorcycle",
            "slot_numbers_for_vehicle_with_colour WHITE",
            "slot_numbers_for_vehicle_with_colour Green",
        ]),
        vec![
            "Created a parking lot with 3 slots.",
            "Allocated slot number: 1",
            "Allocated slot number: 2",
            "Slots for vehicles with color WHITE:",
            "Slot No: 1",
            "Slot No: 2",
            "No vehicles with color Green found.",
        ]
    );
}

#[test]
fn test_parity_reports_in_session() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 4",
            "park 1234 White car",
            "park 77 Black motorcycle",
            "park KA-01-HH-8 Red car",
            "registration_numbers_for_vehicle_with_odd_plate",
            "registration_numbers_for_vehicle_with_even_plate",
        ]),
        vec![
            "Created a parking lot with 4 slots.",
            "Allocated slot number: 1",
            "Allocated slot number: 2",
            "Allocated slot number: 3",
            "Vehicles with odd plate numbers:",
            "77",
            "Vehicles with even plate numbers:",
            "1234",
        ]
    );
}

#[test]
fn test_type_report_in_session() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 3",
            "park KA-01 White car",
            "park KA-02 Black motorcycle",
            "park KA-03 Red car",
            "type_of_vehicles car",
            "type_of_vehicles motorcycle",
        ]),
        vec![
            "Created a parking lot with 3 slots.",
            "Allocated slot number: 1",
            "Allocated slot number: 2",
            "Allocated slot number: 3",
            "Slots for Car vehicles:",
            "Slot No: 1",
            "Slot No: 3",
            "Slots for Motorcycle vehicles:",
            "Slot No: 2",
        ]
    );
}

#[test]
fn test_bare_commands_ignore_extra_tokens() {
    assert_eq!(
        run_session(&[
            "create_parking_lot 1",
            "status please",
            "registration_numbers_for_vehicle_with_odd_plate now",
        ]),
        vec![
            "Created a parking lot with 1 slots.",
            "Slot No.\tType\tRegistration No\tColour",
            "No vehicles currently parked.",
            "No vehicles with odd plate numbers found.",
        ]
    );
}

#[test]
fn test_double_spaced_park_line() {
    // Two spaces make an empty token: five tokens is malformed, but four
    // tokens with an empty colour are accepted and shown as-is in status.
    assert_eq!(
        run_session(&[
            "create_parking_lot 2",
            "park KA-01  White car",
            "park KA-02  car",
            "status",
        ]),
        vec![
            "Created a parking lot with 2 slots.",
            "Invalid park command. Format: park <registration_number> <color> <vehicle_type>",
            "Allocated slot number: 1",
            "Slot No.\tType\tRegistration No\tColour",
            "1\tCar\tKA-02\t",
        ]
    );
}

#[test]
fn test_commands_are_case_insensitive_arguments_are_not() {
    assert_eq!(
        run_session(&[
            "CREATE_PARKING_LOT 2",
            "Park KA-01 WHITE car",
            "STATUS",
        ]),
        vec![
            "Created a parking lot with 2 slots.",
            "Allocated slot number: 1",
            "Slot No.\tType\tRegistration No\tColour",
            "1\tCar\tKA-01\tWHITE",
        ]
    );
}

#[test]
fn test_help_lists_every_command_usage() {
    let mut session = Session::new();
    let help = session.execute("help").render_lines().join("\n");

    for command in COMMANDS {
        assert!(
            help.contains(command.usage),
            "help should mention {}",
            command.name
        );
    }
    assert!(help.contains("Lot commands"));
    assert!(help.contains("Report commands"));
    assert!(help.contains("General commands"));
}

#[test]
fn test_exit_renders_no_lines() {
    let mut session = Session::new();
    let output = session.execute("exit now");
    assert!(output.is_exit());
    assert!(output.render_lines().is_empty());
}
