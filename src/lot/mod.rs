//! The parking lot core: slots, vehicles, and the registry that owns them.
//!
//! Everything here is pure state management. Nothing in this module reads
//! input or prints output; operations return typed results that the command
//! layer renders into protocol lines.

pub mod registry;
pub mod vehicle;

pub use registry::{LotError, ParkingLot, Slot};
pub use vehicle::{Vehicle, VehicleType};
