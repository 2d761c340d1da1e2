//! Command parsing and routing for the line protocol.
//!
//! Parses one input line into a structured command that can be dispatched to
//! handlers, or a [`UsageError`] whose `Display` text is the exact line the
//! session prints. Tokens are separated by single spaces with no quoting, so
//! consecutive spaces produce empty tokens that count toward argument totals.

use std::str::FromStr;

use thiserror::Error;

use crate::lot::VehicleType;

/// Surface-shape errors detected before any registry call.
///
/// Each variant's `Display` text is the protocol message for that rejection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The input line was empty.
    #[error("Invalid command. Please try again.")]
    EmptyInput,

    /// The first token named no known command. Carries that token, which
    /// the protocol message omits.
    #[error("Unknown command. Please try again.")]
    UnknownCommand(String),

    /// `create_parking_lot` without a positive integer argument.
    #[error("Invalid number of slots. Please provide a positive integer.")]
    InvalidSlotCount,

    /// `park` with the wrong number of arguments.
    #[error("Invalid park command. Format: park <registration_number> <color> <vehicle_type>")]
    MalformedPark,

    /// A vehicle type token that is neither `car` nor `motorcycle`.
    #[error("Invalid vehicle type. It must be either 'car' or 'motorcycle'.")]
    InvalidVehicleType,

    /// `leave` without a single integer argument.
    #[error("Invalid leave command. Format: leave <slot_number>")]
    MalformedLeave,

    /// Colour query with the wrong number of arguments.
    #[error("Invalid command. Format: slot_numbers_for_vehicle_with_colour <colour>")]
    MalformedColourQuery,

    /// Registration query with the wrong number of arguments.
    #[error("Invalid command. Format: slot_number_for_registration_number <registration_number>")]
    MalformedRegistrationQuery,
}

/// Parsed command with arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the lot, replacing any existing one.
    CreateLot(usize),
    /// Park a vehicle in the lowest-numbered free slot.
    Park {
        registration_number: String,
        colour: String,
        vehicle_type: VehicleType,
    },
    /// Free a slot by raw number; the registry range-checks it.
    Leave(i64),
    /// Table of occupied slots.
    Status,
    /// Slot numbers holding the given vehicle type.
    VehiclesOfType(VehicleType),
    /// Registrations with odd numeric plates.
    OddPlates,
    /// Registrations with even numeric plates.
    EvenPlates,
    /// Slot numbers holding vehicles of a colour.
    SlotsByColour(String),
    /// Slot holding a registration number.
    SlotByRegistration(String),
    /// Show the command reference.
    Help,
    /// End the session.
    Exit,
}

impl Command {
    /// Protocol name of the command (the first token that selects it).
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateLot(_) => "create_parking_lot",
            Self::Park { .. } => "park",
            Self::Leave(_) => "leave",
            Self::Status => "status",
            Self::VehiclesOfType(_) => "type_of_vehicles",
            Self::OddPlates => "registration_numbers_for_vehicle_with_odd_plate",
            Self::EvenPlates => "registration_numbers_for_vehicle_with_even_plate",
            Self::SlotsByColour(_) => "slot_numbers_for_vehicle_with_colour",
            Self::SlotByRegistration(_) => "slot_number_for_registration_number",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

/// Command router for parsing input lines.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses one input line into a command.
    ///
    /// The line must already be stripped of its trailing newline; interior
    /// whitespace is significant. The first token selects the command
    /// case-insensitively, the rest are positional arguments.
    pub fn parse(line: &str) -> Result<Command, UsageError> {
        if line.is_empty() {
            return Err(UsageError::EmptyInput);
        }

        let tokens: Vec<&str> = line.split(' ').collect();
        let command = tokens[0].to_lowercase();

        match command.as_str() {
            "create_parking_lot" => Self::parse_create(&tokens),
            "park" => Self::parse_park(&tokens),
            "leave" => Self::parse_leave(&tokens),
            "status" => Ok(Command::Status),
            "type_of_vehicles" => Self::parse_vehicles_of_type(&tokens),
            "registration_numbers_for_vehicle_with_odd_plate" => Ok(Command::OddPlates),
            "registration_numbers_for_vehicle_with_even_plate" => Ok(Command::EvenPlates),
            "slot_numbers_for_vehicle_with_colour" => Self::parse_slots_by_colour(&tokens),
            "slot_number_for_registration_number" => Self::parse_slot_by_registration(&tokens),
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            _ => Err(UsageError::UnknownCommand(command)),
        }
    }

    /// Parses `create_parking_lot <n>`. The count must parse as a positive
    /// 32-bit integer.
    fn parse_create(tokens: &[&str]) -> Result<Command, UsageError> {
        let [_, capacity] = tokens else {
            return Err(UsageError::InvalidSlotCount);
        };
        match capacity.parse::<i32>() {
            Ok(n) if n > 0 => Ok(Command::CreateLot(n as usize)),
            _ => Err(UsageError::InvalidSlotCount),
        }
    }

    /// Parses `park <registration_number> <color> <vehicle_type>`.
    fn parse_park(tokens: &[&str]) -> Result<Command, UsageError> {
        let [_, registration_number, colour, vehicle_type] = tokens else {
            return Err(UsageError::MalformedPark);
        };
        let vehicle_type =
            VehicleType::from_str(vehicle_type).map_err(|_| UsageError::InvalidVehicleType)?;
        Ok(Command::Park {
            registration_number: registration_number.to_string(),
            colour: colour.to_string(),
            vehicle_type,
        })
    }

    /// Parses `leave <slot_number>`. Any integer is accepted here; the
    /// registry range-checks it.
    fn parse_leave(tokens: &[&str]) -> Result<Command, UsageError> {
        let [_, slot_number] = tokens else {
            return Err(UsageError::MalformedLeave);
        };
        slot_number
            .parse::<i64>()
            .map(Command::Leave)
            .map_err(|_| UsageError::MalformedLeave)
    }

    /// Parses `type_of_vehicles <vehicle_type>`. A wrong argument count is
    /// reported with the same message as a bad type.
    fn parse_vehicles_of_type(tokens: &[&str]) -> Result<Command, UsageError> {
        let [_, vehicle_type] = tokens else {
            return Err(UsageError::InvalidVehicleType);
        };
        VehicleType::from_str(vehicle_type)
            .map(Command::VehiclesOfType)
            .map_err(|_| UsageError::InvalidVehicleType)
    }

    /// Parses `slot_numbers_for_vehicle_with_colour <colour>`.
    fn parse_slots_by_colour(tokens: &[&str]) -> Result<Command, UsageError> {
        let [_, colour] = tokens else {
            return Err(UsageError::MalformedColourQuery);
        };
        Ok(Command::SlotsByColour(colour.to_string()))
    }

    /// Parses `slot_number_for_registration_number <registration_number>`.
    fn parse_slot_by_registration(tokens: &[&str]) -> Result<Command, UsageError> {
        let [_, registration_number] = tokens else {
            return Err(UsageError::MalformedRegistrationQuery);
        };
        Ok(Command::SlotByRegistration(registration_number.to_string()))
    }
}
