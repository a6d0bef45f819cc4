//! Infrastructure layer for motorpool

pub mod scenario_loader;

pub use scenario_loader::{Scenario, Step, VehicleDefinition};
