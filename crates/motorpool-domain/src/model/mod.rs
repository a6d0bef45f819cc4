//! Domain model types

pub mod passenger_car;
pub mod truck;
pub mod vehicle;

pub use passenger_car::{seat_count_from_number, Cabin, MAX_SEATS, MIN_SEATS};
pub use truck::{CargoBed, LoadGrade};
pub use vehicle::{Body, Ignition, Vehicle, VehicleKind};
