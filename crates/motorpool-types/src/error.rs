//! Error types for motorpool

use thiserror::Error;

/// Classification of a [`VehicleError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value or state precondition failed
    Validation,
    /// The value was of the wrong kind (non-integer, non-finite, misplaced field)
    Type,
}

/// Errors raised by vehicle constructors and mutators.
///
/// Every mutator checks its preconditions before touching state, so a
/// returned error means the vehicle is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be a whole number, got {value}")]
    NotAnInteger { field: &'static str, value: f64 },

    #[error("{field} is not valid for a {kind}")]
    FieldNotApplicable {
        field: &'static str,
        kind: &'static str,
    },

    #[error("{kind} requires {field}")]
    MissingField {
        field: &'static str,
        kind: &'static str,
    },

    #[error("maximum speed must be positive, got {0}")]
    NonPositiveMaxSpeed(f64),

    #[error("speed change of {delta} gives {candidate}, outside 0..={max_speed}")]
    SpeedOutOfRange {
        delta: f64,
        candidate: f64,
        max_speed: f64,
    },

    #[error("seat count must be between {min} and {max}, got {value}")]
    SeatCountOutOfRange { value: i64, min: u8, max: u8 },

    #[error("vehicle full")]
    VehicleFull,

    #[error("cabin empty")]
    CabinEmpty,

    #[error("maximum load capacity must be positive, got {0}")]
    NonPositiveLoadCapacity(f64),

    #[error("maximum load capacity {requested} is below the {occupied} already aboard")]
    CapacityBelowOccupied { requested: f64, occupied: f64 },

    #[error("cargo weight must not be negative, got {0}")]
    NegativeWeight(f64),

    #[error("overloaded: {weight} does not fit in {free} of free capacity")]
    Overloaded { weight: f64, free: f64 },

    #[error("cannot unload {weight}, only {occupied} aboard")]
    UnloadExceedsCargo { weight: f64, occupied: f64 },

    #[error("{operation} is not supported by a {kind}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("vehicle '{0}' is already registered")]
    DuplicateVehicle(String),

    #[error("no vehicle named '{0}'")]
    UnknownVehicle(String),
}

impl VehicleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VehicleError::NotFinite { .. }
            | VehicleError::NotAnInteger { .. }
            | VehicleError::FieldNotApplicable { .. } => ErrorKind::Type,
            _ => ErrorKind::Validation,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Vehicle error: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Scenario step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: VehicleError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
