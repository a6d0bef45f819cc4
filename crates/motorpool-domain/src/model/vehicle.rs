//! Base vehicle entity and body dispatch

use std::fmt;

use serde::{Deserialize, Serialize};
use motorpool_types::VehicleError;

use super::passenger_car::Cabin;
use super::truck::CargoBed;

pub(crate) const BOARD_PASSENGER: &str = "board passenger";
pub(crate) const DISEMBARK_PASSENGER: &str = "disembark passenger";
pub(crate) const LOAD_CARGO: &str = "load cargo";
pub(crate) const UNLOAD_CARGO: &str = "unload cargo";
pub(crate) const SET_MAX_LOAD_CAPACITY: &str = "set max load capacity";

/// Which specialisation a vehicle carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Standard,
    PassengerCar,
    Truck,
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Standard => "vehicle",
            VehicleKind::PassengerCar => "passenger car",
            VehicleKind::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Type-specific state layered on top of the shared vehicle fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    Standard,
    PassengerCar(Cabin),
    Truck(CargoBed),
}

impl Body {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Body::Standard => VehicleKind::Standard,
            Body::PassengerCar(_) => VehicleKind::PassengerCar,
            Body::Truck(_) => VehicleKind::Truck,
        }
    }
}

/// Ignition routine that ran on [`Vehicle::start_engine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignition {
    Standard,
    Passenger,
    Cargo,
}

impl fmt::Display for Ignition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignition::Standard => write!(f, "standard ignition"),
            Ignition::Passenger => write!(f, "passenger ignition"),
            Ignition::Cargo => write!(f, "cargo ignition"),
        }
    }
}

/// A vehicle with a brand, a color and a bounded current speed.
///
/// Invariant: `0 <= current_speed <= max_speed` and `max_speed > 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    brand: String,
    color: String,
    max_speed: f64,
    current_speed: f64,
    body: Body,
}

impl Vehicle {
    /// Create a plain vehicle standing still
    pub fn new(
        brand: impl Into<String>,
        max_speed: f64,
        color: impl Into<String>,
    ) -> Result<Self, VehicleError> {
        let max_speed = check_max_speed(max_speed)?;
        let brand = require_text(brand.into(), "brand")?;
        let color = require_text(color.into(), "color")?;
        Ok(Self {
            brand,
            color,
            max_speed,
            current_speed: 0.0,
            body: Body::Standard,
        })
    }

    /// Create a passenger car; one of `seat_count` seats belongs to the driver
    pub fn passenger_car(
        brand: impl Into<String>,
        max_speed: f64,
        color: impl Into<String>,
        seat_count: u8,
    ) -> Result<Self, VehicleError> {
        let mut vehicle = Self::new(brand, max_speed, color)?;
        vehicle.body = Body::PassengerCar(Cabin::new(seat_count)?);
        Ok(vehicle)
    }

    /// Create an empty truck
    pub fn truck(
        brand: impl Into<String>,
        max_speed: f64,
        color: impl Into<String>,
        max_load_capacity: f64,
    ) -> Result<Self, VehicleError> {
        let mut vehicle = Self::new(brand, max_speed, color)?;
        vehicle.body = Body::Truck(CargoBed::new(max_load_capacity)?);
        Ok(vehicle)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn kind(&self) -> VehicleKind {
        self.body.kind()
    }

    pub fn cabin(&self) -> Option<&Cabin> {
        match &self.body {
            Body::PassengerCar(cabin) => Some(cabin),
            _ => None,
        }
    }

    pub fn cargo_bed(&self) -> Option<&CargoBed> {
        match &self.body {
            Body::Truck(bed) => Some(bed),
            _ => None,
        }
    }

    /// Change the top speed, pulling the current speed down if it no longer fits
    pub fn set_max_speed(&mut self, new_max: f64) -> Result<(), VehicleError> {
        let new_max = check_max_speed(new_max)?;
        self.max_speed = new_max;
        if self.current_speed > new_max {
            self.current_speed = new_max;
        }
        Ok(())
    }

    pub fn set_color(&mut self, new_color: impl Into<String>) -> Result<(), VehicleError> {
        self.color = require_text(new_color.into(), "color")?;
        Ok(())
    }

    /// Accelerate (positive delta) or brake (negative delta)
    pub fn update_current_speed(&mut self, delta: f64) -> Result<f64, VehicleError> {
        let delta = require_finite(delta, "speed change")?;
        let candidate = self.current_speed + delta;
        if candidate < 0.0 || candidate > self.max_speed {
            return Err(VehicleError::SpeedOutOfRange {
                delta,
                candidate,
                max_speed: self.max_speed,
            });
        }
        self.current_speed = candidate;
        Ok(candidate)
    }

    pub fn start_engine(&self) -> Ignition {
        match self.body {
            Body::Standard => Ignition::Standard,
            Body::PassengerCar(_) => Ignition::Passenger,
            Body::Truck(_) => Ignition::Cargo,
        }
    }

    /// Seat one passenger; returns the passenger seats still free
    pub fn board_passenger(&mut self) -> Result<u8, VehicleError> {
        self.cabin_for(BOARD_PASSENGER)?.board()
    }

    /// Let one passenger out; returns the passenger seats now free
    pub fn disembark_passenger(&mut self) -> Result<u8, VehicleError> {
        self.cabin_for(DISEMBARK_PASSENGER)?.disembark()
    }

    /// Put cargo aboard; returns the remaining free capacity
    pub fn load_cargo(&mut self, weight: f64) -> Result<f64, VehicleError> {
        self.cargo_bed_for(LOAD_CARGO)?.load(weight)
    }

    /// Take cargo off; returns the resulting free capacity
    pub fn unload_cargo(&mut self, weight: f64) -> Result<f64, VehicleError> {
        self.cargo_bed_for(UNLOAD_CARGO)?.unload(weight)
    }

    pub fn set_max_load_capacity(&mut self, value: f64) -> Result<(), VehicleError> {
        self.cargo_bed_for(SET_MAX_LOAD_CAPACITY)?
            .set_max_load_capacity(value)
    }

    pub(crate) fn cabin_for(&mut self, operation: &'static str) -> Result<&mut Cabin, VehicleError> {
        let kind = self.kind();
        match &mut self.body {
            Body::PassengerCar(cabin) => Ok(cabin),
            _ => Err(VehicleError::UnsupportedOperation {
                operation,
                kind: kind.label(),
            }),
        }
    }

    pub(crate) fn cargo_bed_for(&mut self, operation: &'static str) -> Result<&mut CargoBed, VehicleError> {
        let kind = self.kind();
        match &mut self.body {
            Body::Truck(bed) => Ok(bed),
            _ => Err(VehicleError::UnsupportedOperation {
                operation,
                kind: kind.label(),
            }),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Brand: {}. Max speed: {}. Color: {}.",
            self.brand, self.max_speed, self.color
        )?;
        match &self.body {
            Body::Standard => Ok(()),
            Body::PassengerCar(cabin) => {
                write!(f, " Passenger seats: {}.", cabin.passenger_capacity())
            }
            Body::Truck(bed) => write!(f, " Load capacity: {}.", bed.max_load_capacity()),
        }
    }
}

fn check_max_speed(value: f64) -> Result<f64, VehicleError> {
    let value = require_finite(value, "maximum speed")?;
    if value <= 0.0 {
        return Err(VehicleError::NonPositiveMaxSpeed(value));
    }
    Ok(value)
}

pub(crate) fn require_finite(value: f64, field: &'static str) -> Result<f64, VehicleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VehicleError::NotFinite { field, value })
    }
}

pub(crate) fn require_text(value: String, field: &'static str) -> Result<String, VehicleError> {
    if value.trim().is_empty() {
        return Err(VehicleError::EmptyField { field });
    }
    Ok(value)
}
