//! In-memory registry of named vehicles

use std::collections::BTreeMap;

use motorpool_types::VehicleError;

use crate::model::Vehicle;
use crate::service::{Operation, Outcome};

/// Named vehicles, iterated in name order
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: BTreeMap<String, Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle under a unique name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        vehicle: Vehicle,
    ) -> Result<(), VehicleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VehicleError::EmptyField { field: "name" });
        }
        if self.vehicles.contains_key(&name) {
            return Err(VehicleError::DuplicateVehicle(name));
        }
        self.vehicles.insert(name, vehicle);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Vehicle> {
        self.vehicles.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vehicles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Vehicle)> {
        self.vehicles.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Apply an operation to the named vehicle
    pub fn apply(&mut self, name: &str, operation: &Operation) -> Result<Outcome, VehicleError> {
        let vehicle = self
            .vehicles
            .get_mut(name)
            .ok_or_else(|| VehicleError::UnknownVehicle(name.to_string()))?;
        operation.apply(vehicle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet
            .register("hauler", Vehicle::truck("KAMAZ", 90.0, "orange", 1000.0).unwrap())
            .unwrap();
        fleet
            .register("family", Vehicle::passenger_car("Lada", 150.0, "white", 5).unwrap())
            .unwrap();
        fleet
    }

    #[test]
    fn test_register_and_iterate_in_name_order() {
        let fleet = fleet();
        assert_eq!(fleet.len(), 2);
        let names: Vec<_> = fleet.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["family", "hauler"]);
    }

    #[test]
    fn test_register_rejects_duplicates_and_empty_names() {
        let mut fleet = fleet();
        let spare = Vehicle::new("Volvo", 100.0, "red").unwrap();
        assert_eq!(
            fleet.register("hauler", spare.clone()).unwrap_err(),
            VehicleError::DuplicateVehicle("hauler".to_string())
        );
        assert_eq!(
            fleet.register(" ", spare).unwrap_err(),
            VehicleError::EmptyField { field: "name" }
        );
        assert_eq!(fleet.len(), 2);
    }

    #[test]
    fn test_apply_to_named_vehicle() {
        let mut fleet = fleet();
        fleet.apply("hauler", &Operation::Load { weight: 300.0 }).unwrap();
        let bed = fleet.get("hauler").and_then(|v| v.cargo_bed()).unwrap();
        assert_eq!(bed.free_capacity(), 700.0);
    }

    #[test]
    fn test_apply_to_unknown_vehicle() {
        let mut fleet = fleet();
        assert_eq!(
            fleet.apply("ghost", &Operation::Board).unwrap_err(),
            VehicleError::UnknownVehicle("ghost".to_string())
        );
    }

    #[test]
    fn test_remove() {
        let mut fleet = fleet();
        assert!(fleet.remove("family").is_some());
        assert!(!fleet.contains("family"));
        assert!(fleet.remove("family").is_none());
    }
}
