//! Truck cargo bed: load capacity and cargo handling

use serde::{Deserialize, Serialize};
use motorpool_types::VehicleError;

use super::vehicle::require_finite;

/// How full a cargo bed is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadGrade {
    /// Below half
    Light,
    /// 50-90%
    Partial,
    /// 90-100%
    NearFull,
    /// No free capacity left
    Full,
}

impl LoadGrade {
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r < 0.5 => LoadGrade::Light,
            r if r < 0.9 => LoadGrade::Partial,
            r if r < 1.0 => LoadGrade::NearFull,
            _ => LoadGrade::Full,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadGrade::Light => "light",
            LoadGrade::Partial => "partial",
            LoadGrade::NearFull => "near full",
            LoadGrade::Full => "full",
        }
    }
}

/// Cargo bed of a truck.
///
/// Invariant: `0 <= free_capacity <= max_load_capacity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CargoBed {
    max_load_capacity: f64,
    free_capacity: f64,
}

impl CargoBed {
    /// Create an empty cargo bed
    pub fn new(max_load_capacity: f64) -> Result<Self, VehicleError> {
        let max_load_capacity = check_capacity(max_load_capacity)?;
        Ok(Self {
            max_load_capacity,
            free_capacity: max_load_capacity,
        })
    }

    pub fn max_load_capacity(&self) -> f64 {
        self.max_load_capacity
    }

    pub fn free_capacity(&self) -> f64 {
        self.free_capacity
    }

    pub fn occupied_capacity(&self) -> f64 {
        self.max_load_capacity - self.free_capacity
    }

    pub fn load_ratio(&self) -> f64 {
        self.occupied_capacity() / self.max_load_capacity
    }

    pub fn load_grade(&self) -> LoadGrade {
        LoadGrade::from_ratio(self.load_ratio())
    }

    /// Resize the bed, keeping the cargo already aboard
    pub fn set_max_load_capacity(&mut self, value: f64) -> Result<(), VehicleError> {
        let value = check_capacity(value)?;
        let occupied = self.occupied_capacity();
        if value < occupied - tolerance(value.max(occupied)) {
            return Err(VehicleError::CapacityBelowOccupied {
                requested: value,
                occupied,
            });
        }
        self.max_load_capacity = value;
        self.free_capacity = self.settle(value - occupied);
        Ok(())
    }

    pub fn load(&mut self, weight: f64) -> Result<f64, VehicleError> {
        let weight = check_weight(weight)?;
        if self.free_capacity - weight < -self.tolerance() {
            return Err(VehicleError::Overloaded {
                weight,
                free: self.free_capacity,
            });
        }
        self.free_capacity = self.settle(self.free_capacity - weight);
        Ok(self.free_capacity)
    }

    pub fn unload(&mut self, weight: f64) -> Result<f64, VehicleError> {
        let weight = check_weight(weight)?;
        if self.free_capacity + weight > self.max_load_capacity + self.tolerance() {
            return Err(VehicleError::UnloadExceedsCargo {
                weight,
                occupied: self.occupied_capacity(),
            });
        }
        self.free_capacity = self.settle(self.free_capacity + weight);
        Ok(self.free_capacity)
    }

    fn tolerance(&self) -> f64 {
        tolerance(self.max_load_capacity)
    }

    /// Snap a free capacity within rounding slack of empty or full onto the bound
    fn settle(&self, free: f64) -> f64 {
        let slack = self.tolerance();
        if free <= slack {
            0.0
        } else if free >= self.max_load_capacity - slack {
            self.max_load_capacity
        } else {
            free
        }
    }
}

/// Rounding slack for capacity comparisons, relative to the bed size
fn tolerance(scale: f64) -> f64 {
    scale * 1e-9
}

fn check_capacity(value: f64) -> Result<f64, VehicleError> {
    let value = require_finite(value, "maximum load capacity")?;
    if value <= 0.0 {
        return Err(VehicleError::NonPositiveLoadCapacity(value));
    }
    Ok(value)
}

fn check_weight(weight: f64) -> Result<f64, VehicleError> {
    let weight = require_finite(weight, "cargo weight")?;
    if weight < 0.0 {
        return Err(VehicleError::NegativeWeight(weight));
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorpool_types::ErrorKind;

    #[test]
    fn test_new_bed_is_empty() {
        let bed = CargoBed::new(1000.0).unwrap();
        assert_eq!(bed.max_load_capacity(), 1000.0);
        assert_eq!(bed.free_capacity(), 1000.0);
        assert_eq!(bed.occupied_capacity(), 0.0);
        assert_eq!(bed.load_grade(), LoadGrade::Light);
    }

    #[test]
    fn test_new_rejects_bad_capacity() {
        assert_eq!(
            CargoBed::new(0.0).unwrap_err(),
            VehicleError::NonPositiveLoadCapacity(0.0)
        );
        assert_eq!(CargoBed::new(f64::NAN).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn test_load_to_full_then_overload() {
        let mut bed = CargoBed::new(1000.0).unwrap();
        assert_eq!(bed.load(1000.0).unwrap(), 0.0);
        assert_eq!(bed.load_grade(), LoadGrade::Full);

        let err = bed.load(1.0).unwrap_err();
        assert_eq!(
            err,
            VehicleError::Overloaded {
                weight: 1.0,
                free: 0.0
            }
        );
        assert!(err.to_string().starts_with("overloaded"));
        assert_eq!(bed.free_capacity(), 0.0);
    }

    #[test]
    fn test_unload_is_inverse_of_load() {
        let mut bed = CargoBed::new(1000.0).unwrap();
        bed.load(600.0).unwrap();
        assert_eq!(bed.unload(250.0).unwrap(), 650.0);
        assert_eq!(bed.unload(350.0).unwrap(), 1000.0);
        assert!(matches!(
            bed.unload(1.0),
            Err(VehicleError::UnloadExceedsCargo { .. })
        ));
        assert_eq!(bed.free_capacity(), 1000.0);
    }

    #[test]
    fn test_fractional_cargo_unloads_to_empty_in_any_order() {
        let mut bed = CargoBed::new(1.0).unwrap();
        bed.load(0.1).unwrap();
        bed.load(0.3).unwrap();
        bed.unload(0.3).unwrap();
        assert_eq!(bed.unload(0.1).unwrap(), 1.0);
        assert_eq!(bed.occupied_capacity(), 0.0);

        for weight in [0.1, 0.2, 0.3, 0.4] {
            bed.load(weight).unwrap();
        }
        assert_eq!(bed.free_capacity(), 0.0);
        assert_eq!(bed.load_grade(), LoadGrade::Full);
        for weight in [0.4, 0.1, 0.3, 0.2] {
            bed.unload(weight).unwrap();
        }
        assert_eq!(bed.free_capacity(), 1.0);
        assert!(bed.unload(0.01).is_err());
        assert!(bed.load(1.01).is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut bed = CargoBed::new(100.0).unwrap();
        assert_eq!(bed.load(-5.0).unwrap_err(), VehicleError::NegativeWeight(-5.0));
        assert_eq!(bed.unload(-5.0).unwrap_err(), VehicleError::NegativeWeight(-5.0));
        assert_eq!(bed.free_capacity(), 100.0);
    }

    #[test]
    fn test_set_max_load_capacity_keeps_cargo() {
        let mut bed = CargoBed::new(1000.0).unwrap();
        bed.load(400.0).unwrap();

        bed.set_max_load_capacity(500.0).unwrap();
        assert_eq!(bed.max_load_capacity(), 500.0);
        assert_eq!(bed.free_capacity(), 100.0);
        assert_eq!(bed.occupied_capacity(), 400.0);

        bed.set_max_load_capacity(400.0).unwrap();
        assert_eq!(bed.free_capacity(), 0.0);
    }

    #[test]
    fn test_set_max_load_capacity_below_cargo_fails() {
        let mut bed = CargoBed::new(1000.0).unwrap();
        bed.load(400.0).unwrap();
        assert_eq!(
            bed.set_max_load_capacity(300.0).unwrap_err(),
            VehicleError::CapacityBelowOccupied {
                requested: 300.0,
                occupied: 400.0
            }
        );
        assert!(bed.set_max_load_capacity(0.0).is_err());
        assert_eq!(bed.max_load_capacity(), 1000.0);
        assert_eq!(bed.free_capacity(), 600.0);
    }

    #[test]
    fn test_load_grade_from_ratio() {
        assert_eq!(LoadGrade::from_ratio(0.0), LoadGrade::Light);
        assert_eq!(LoadGrade::from_ratio(0.5), LoadGrade::Partial);
        assert_eq!(LoadGrade::from_ratio(0.95), LoadGrade::NearFull);
        assert_eq!(LoadGrade::from_ratio(1.0), LoadGrade::Full);
    }
}
