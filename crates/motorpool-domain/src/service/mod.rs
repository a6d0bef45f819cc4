//! Domain services

pub mod fleet_report;
pub mod operation;

pub use fleet_report::{generate_fleet_report, summarize_fleet, VehicleSummary};
pub use operation::{Operation, Outcome};
