//! Scriptable vehicle operations

use std::fmt;

use serde::{Deserialize, Serialize};
use motorpool_types::VehicleError;

use crate::model::vehicle::{
    BOARD_PASSENGER, DISEMBARK_PASSENGER, LOAD_CARGO, SET_MAX_LOAD_CAPACITY, UNLOAD_CARGO,
};
use crate::model::{Cabin, CargoBed, Ignition, Vehicle};

/// A single mutation applied to a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Operation {
    ChangeSpeed { delta: f64 },
    SetMaxSpeed { value: f64 },
    Repaint { color: String },
    StartEngine,
    Board,
    Disembark,
    Load { weight: f64 },
    Unload { weight: f64 },
    SetMaxLoad { value: f64 },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ChangeSpeed { .. } => "change_speed",
            Operation::SetMaxSpeed { .. } => "set_max_speed",
            Operation::Repaint { .. } => "repaint",
            Operation::StartEngine => "start_engine",
            Operation::Board => "board",
            Operation::Disembark => "disembark",
            Operation::Load { .. } => "load",
            Operation::Unload { .. } => "unload",
            Operation::SetMaxLoad { .. } => "set_max_load",
        }
    }

    pub fn apply(&self, vehicle: &mut Vehicle) -> Result<Outcome, VehicleError> {
        match self {
            Operation::ChangeSpeed { delta } => {
                vehicle.update_current_speed(*delta)?;
                Ok(Outcome::speed(vehicle))
            }
            Operation::SetMaxSpeed { value } => {
                vehicle.set_max_speed(*value)?;
                Ok(Outcome::speed(vehicle))
            }
            Operation::Repaint { color } => {
                vehicle.set_color(color.as_str())?;
                Ok(Outcome::Color {
                    color: vehicle.color().to_string(),
                })
            }
            Operation::StartEngine => Ok(Outcome::EngineStarted {
                ignition: vehicle.start_engine(),
            }),
            Operation::Board => {
                let cabin = vehicle.cabin_for(BOARD_PASSENGER)?;
                cabin.board()?;
                Ok(Outcome::seats(cabin))
            }
            Operation::Disembark => {
                let cabin = vehicle.cabin_for(DISEMBARK_PASSENGER)?;
                cabin.disembark()?;
                Ok(Outcome::seats(cabin))
            }
            Operation::Load { weight } => {
                let bed = vehicle.cargo_bed_for(LOAD_CARGO)?;
                bed.load(*weight)?;
                Ok(Outcome::cargo(bed))
            }
            Operation::Unload { weight } => {
                let bed = vehicle.cargo_bed_for(UNLOAD_CARGO)?;
                bed.unload(*weight)?;
                Ok(Outcome::cargo(bed))
            }
            Operation::SetMaxLoad { value } => {
                let bed = vehicle.cargo_bed_for(SET_MAX_LOAD_CAPACITY)?;
                bed.set_max_load_capacity(*value)?;
                Ok(Outcome::cargo(bed))
            }
        }
    }
}

/// Observable state after a successful [`Operation`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Speed { current_speed: f64, max_speed: f64 },
    Color { color: String },
    EngineStarted { ignition: Ignition },
    Seats { available: u8, aboard: u8 },
    Cargo { free: f64, occupied: f64, max: f64 },
}

impl Outcome {
    fn speed(vehicle: &Vehicle) -> Self {
        Outcome::Speed {
            current_speed: vehicle.current_speed(),
            max_speed: vehicle.max_speed(),
        }
    }

    fn seats(cabin: &Cabin) -> Self {
        Outcome::Seats {
            available: cabin.available_passenger_seats(),
            aboard: cabin.passengers_aboard(),
        }
    }

    fn cargo(bed: &CargoBed) -> Self {
        Outcome::Cargo {
            free: bed.free_capacity(),
            occupied: bed.occupied_capacity(),
            max: bed.max_load_capacity(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Speed {
                current_speed,
                max_speed,
            } => write!(f, "speed {} / {}", current_speed, max_speed),
            Outcome::Color { color } => write!(f, "color {}", color),
            Outcome::EngineStarted { ignition } => write!(f, "engine started ({})", ignition),
            Outcome::Seats { available, aboard } => {
                write!(f, "{} aboard, {} seats free", aboard, available)
            }
            Outcome::Cargo {
                free,
                occupied,
                max,
            } => write!(f, "cargo {} / {}, {} free", occupied, max, free),
        }
    }
}
