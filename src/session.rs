//! The stateful command session.
//!
//! [`Session`] owns the lot (once created) and turns input lines into
//! rendered command output. A panic raised while processing a single line is
//! contained here and reported as an error line, so one bad command cannot
//! end the session.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use crate::commands::definitions::find_command;
use crate::commands::handlers::{lot as lot_handlers, reports, system, PARKING_LOT_NOT_CREATED};
use crate::commands::{Command, CommandOutput, CommandRouter};
use crate::lot::{LotError, ParkingLot};

/// A single-user command session over one optional parking lot.
#[derive(Debug, Default)]
pub struct Session {
    lot: Option<ParkingLot>,
}

impl Session {
    /// Creates a session with no lot; `create_parking_lot` must run before
    /// any lot command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a pre-created lot of the given capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, LotError> {
        Ok(Self {
            lot: Some(ParkingLot::new(capacity)?),
        })
    }

    /// The current lot, if one has been created.
    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Executes one input line and returns its output.
    ///
    /// Never panics: an unexpected panic in command processing is caught and
    /// reported as a generic error line, leaving the session usable.
    pub fn execute(&mut self, line: &str) -> CommandOutput {
        match panic::catch_unwind(AssertUnwindSafe(|| self.process(line))) {
            Ok(output) => output,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(panic = %message, "command processing panicked");
                CommandOutput::error(format!("An error occurred: {message}"))
            }
        }
    }

    fn process(&mut self, line: &str) -> CommandOutput {
        // The missing-lot gate outranks shape validation: a malformed lot
        // command still reports the missing lot, not its usage error.
        if self.lot.is_none() && needs_lot(line) {
            debug!("refused lot command before creation");
            return CommandOutput::error(PARKING_LOT_NOT_CREATED);
        }

        let command = match CommandRouter::parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, line, "rejected input line");
                return CommandOutput::error(err.to_string());
            }
        };

        debug!(command = command.name(), "dispatching command");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command) -> CommandOutput {
        match command {
            Command::CreateLot(capacity) => lot_handlers::handle_create(&mut self.lot, capacity),
            Command::Park {
                registration_number,
                colour,
                vehicle_type,
            } => lot_handlers::handle_park(&mut self.lot, registration_number, colour, vehicle_type),
            Command::Leave(slot_number) => lot_handlers::handle_leave(&mut self.lot, slot_number),
            Command::Status => reports::handle_status(&self.lot),
            Command::VehiclesOfType(vehicle_type) => {
                reports::handle_vehicles_of_type(&self.lot, vehicle_type)
            }
            Command::OddPlates => reports::handle_odd_plates(&self.lot),
            Command::EvenPlates => reports::handle_even_plates(&self.lot),
            Command::SlotsByColour(colour) => reports::handle_slots_by_colour(&self.lot, &colour),
            Command::SlotByRegistration(registration_number) => {
                reports::handle_slot_by_registration(&self.lot, &registration_number)
            }
            Command::Help => system::handle_help(),
            Command::Exit => system::handle_exit(),
        }
    }
}

/// Whether the line's first token selects a command that needs a created
/// lot. Unknown and empty first tokens are not gated; they get their own
/// messages from the router.
fn needs_lot(line: &str) -> bool {
    let first_token = line.split(' ').next().unwrap_or("");
    find_command(first_token).is_some_and(|def| def.requires_lot)
}

/// Best-effort text for a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected internal fault".to_string()
    }
}
