//! Scenario loader: fleet definitions and operation scripts from TOML

use std::fs;
use std::path::Path;

use serde::Deserialize;
use motorpool_domain::service::Operation;
use motorpool_domain::{seat_count_from_number, Fleet, Vehicle, VehicleKind};
use motorpool_types::{ConfigError, Error, Result, VehicleError};

/// One `[[vehicles]]` entry as written in the file
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleDefinition {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: VehicleKind,
    pub brand: String,
    pub max_speed: f64,
    pub color: String,
    /// Passenger cars only. Kept as a raw number so fractional seats are reported.
    #[serde(default)]
    pub seats: Option<f64>,
    /// Trucks only
    #[serde(default)]
    pub max_load: Option<f64>,
}

fn default_kind() -> VehicleKind {
    VehicleKind::Standard
}

impl VehicleDefinition {
    /// Build the vehicle, rejecting fields that do not belong to its kind
    pub fn build(&self) -> std::result::Result<Vehicle, VehicleError> {
        let kind = self.kind.label();
        match self.kind {
            VehicleKind::Standard => {
                self.reject_seats(kind)?;
                self.reject_max_load(kind)?;
                Vehicle::new(self.brand.as_str(), self.max_speed, self.color.as_str())
            }
            VehicleKind::PassengerCar => {
                self.reject_max_load(kind)?;
                let seats = self
                    .seats
                    .ok_or(VehicleError::MissingField { field: "seats", kind })?;
                let seats = seat_count_from_number(seats)?;
                Vehicle::passenger_car(
                    self.brand.as_str(),
                    self.max_speed,
                    self.color.as_str(),
                    seats,
                )
            }
            VehicleKind::Truck => {
                self.reject_seats(kind)?;
                let max_load = self
                    .max_load
                    .ok_or(VehicleError::MissingField { field: "max_load", kind })?;
                Vehicle::truck(
                    self.brand.as_str(),
                    self.max_speed,
                    self.color.as_str(),
                    max_load,
                )
            }
        }
    }

    fn reject_seats(&self, kind: &'static str) -> std::result::Result<(), VehicleError> {
        match self.seats {
            Some(_) => Err(VehicleError::FieldNotApplicable {
                field: "seats",
                kind,
            }),
            None => Ok(()),
        }
    }

    fn reject_max_load(&self, kind: &'static str) -> std::result::Result<(), VehicleError> {
        match self.max_load {
            Some(_) => Err(VehicleError::FieldNotApplicable {
                field: "max_load",
                kind,
            }),
            None => Ok(()),
        }
    }
}

/// One `[[steps]]` entry: the target vehicle plus an operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub vehicle: String,
    #[serde(flatten)]
    pub operation: Operation,
}

/// Container for parsing scenario files
#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    vehicles: Vec<VehicleDefinition>,
    #[serde(default)]
    steps: Vec<Step>,
}

/// A validated fleet and the script to run against it
#[derive(Debug)]
pub struct Scenario {
    pub fleet: Fleet,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "loading scenario");
        let content = fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    /// Load a scenario from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: ScenarioFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse scenario TOML: {}",
                e
            )))
        })?;

        let mut fleet = Fleet::new();
        for definition in &file.vehicles {
            let vehicle = definition.build().map_err(|e| {
                tracing::warn!(vehicle = %definition.name, error = %e, "invalid vehicle definition");
                e
            })?;
            tracing::debug!(vehicle = %definition.name, kind = %vehicle.kind(), "registered vehicle");
            fleet.register(definition.name.as_str(), vehicle)?;
        }

        for step in &file.steps {
            if !fleet.contains(&step.vehicle) {
                return Err(VehicleError::UnknownVehicle(step.vehicle.clone()).into());
            }
        }

        tracing::debug!(
            vehicles = fleet.len(),
            steps = file.steps.len(),
            "scenario loaded"
        );
        Ok(Self {
            fleet,
            steps: file.steps,
        })
    }
}
