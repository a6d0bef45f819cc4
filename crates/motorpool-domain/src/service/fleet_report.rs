//! Fleet summary and text report

use serde::Serialize;

use crate::fleet::Fleet;
use crate::model::{Body, LoadGrade, VehicleKind};

/// Snapshot of one vehicle for reporting
#[derive(Debug, Clone, Serialize)]
pub struct VehicleSummary {
    pub name: String,
    pub kind: VehicleKind,
    pub brand: String,
    pub color: String,
    pub current_speed: f64,
    pub max_speed: f64,
    pub free_seats: Option<u8>,
    pub passengers_aboard: Option<u8>,
    pub free_capacity: Option<f64>,
    pub max_load_capacity: Option<f64>,
    pub load_grade: Option<LoadGrade>,
}

pub fn summarize_fleet(fleet: &Fleet) -> Vec<VehicleSummary> {
    fleet
        .iter()
        .map(|(name, vehicle)| {
            let mut summary = VehicleSummary {
                name: name.to_string(),
                kind: vehicle.kind(),
                brand: vehicle.brand().to_string(),
                color: vehicle.color().to_string(),
                current_speed: vehicle.current_speed(),
                max_speed: vehicle.max_speed(),
                free_seats: None,
                passengers_aboard: None,
                free_capacity: None,
                max_load_capacity: None,
                load_grade: None,
            };
            match vehicle.body() {
                Body::Standard => {}
                Body::PassengerCar(cabin) => {
                    summary.free_seats = Some(cabin.available_passenger_seats());
                    summary.passengers_aboard = Some(cabin.passengers_aboard());
                }
                Body::Truck(bed) => {
                    summary.free_capacity = Some(bed.free_capacity());
                    summary.max_load_capacity = Some(bed.max_load_capacity());
                    summary.load_grade = Some(bed.load_grade());
                }
            }
            summary
        })
        .collect()
}

pub fn generate_fleet_report(summaries: &[VehicleSummary]) -> String {
    let count_kind = |kind: VehicleKind| summaries.iter().filter(|s| s.kind == kind).count();
    let passengers: u32 = summaries
        .iter()
        .filter_map(|s| s.passengers_aboard)
        .map(u32::from)
        .sum();
    let cargo: f64 = summaries
        .iter()
        .filter_map(|s| Some(s.max_load_capacity? - s.free_capacity?))
        .sum();
    let moving = summaries.iter().filter(|s| s.current_speed > 0.0).count();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                  Fleet Report                    \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Summary]\n");
    report.push_str(&format!("  Vehicles:            {}\n", summaries.len()));
    report.push_str(&format!(
        "  Standard:            {}\n",
        count_kind(VehicleKind::Standard)
    ));
    report.push_str(&format!(
        "  Passenger cars:      {}\n",
        count_kind(VehicleKind::PassengerCar)
    ));
    report.push_str(&format!(
        "  Trucks:              {}\n",
        count_kind(VehicleKind::Truck)
    ));
    report.push_str(&format!("  Moving:              {}\n", moving));
    report.push_str(&format!("  Passengers aboard:   {}\n", passengers));
    report.push_str(&format!("  Cargo aboard:        {:.2}\n", cargo));
    report.push('\n');

    if summaries.is_empty() {
        report.push_str("[No vehicles]\n\n");
    } else {
        report.push_str("[Vehicles]\n");
        report.push_str("-".repeat(74).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:<14} {:<10} {:>15} {:>18}\n",
            "Name", "Kind", "Brand", "Speed", "Payload"
        ));
        report.push_str("-".repeat(74).as_str());
        report.push('\n');
        for s in summaries {
            let speed = format!("{:.0}/{:.0}", s.current_speed, s.max_speed);
            report.push_str(&format!(
                "{:<12} {:<14} {:<10} {:>15} {:>18}\n",
                truncate_str(&s.name, 11),
                s.kind.label(),
                truncate_str(&s.brand, 9),
                speed,
                payload_column(s)
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn payload_column(summary: &VehicleSummary) -> String {
    match (summary.free_seats, summary.free_capacity, summary.max_load_capacity) {
        (Some(free), _, _) => format!("{} seats free", free),
        (None, Some(free), Some(max)) => {
            let grade = summary.load_grade.map(|g| g.label()).unwrap_or("-");
            format!("{:.0}/{:.0} {}", max - free, max, grade)
        }
        _ => "-".to_string(),
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vehicle;

    fn fleet() -> Fleet {
        let mut fleet = Fleet::new();
        let mut truck = Vehicle::truck("KAMAZ", 90.0, "orange", 1000.0).unwrap();
        truck.load_cargo(950.0).unwrap();
        fleet.register("hauler", truck).unwrap();

        let mut car = Vehicle::passenger_car("Lada", 150.0, "white", 5).unwrap();
        car.board_passenger().unwrap();
        car.board_passenger().unwrap();
        car.update_current_speed(60.0).unwrap();
        fleet.register("family", car).unwrap();

        fleet
            .register("plain", Vehicle::new("Volvo", 100.0, "red").unwrap())
            .unwrap();
        fleet
    }

    #[test]
    fn test_summarize_fleet() {
        let summaries = summarize_fleet(&fleet());
        assert_eq!(summaries.len(), 3);

        let family = &summaries[0];
        assert_eq!(family.name, "family");
        assert_eq!(family.kind, VehicleKind::PassengerCar);
        assert_eq!(family.free_seats, Some(2));
        assert_eq!(family.passengers_aboard, Some(2));
        assert!(family.load_grade.is_none());

        let hauler = &summaries[1];
        assert_eq!(hauler.free_capacity, Some(50.0));
        assert_eq!(hauler.load_grade, Some(LoadGrade::NearFull));

        let plain = &summaries[2];
        assert_eq!(plain.kind, VehicleKind::Standard);
        assert!(plain.free_seats.is_none());
        assert!(plain.free_capacity.is_none());
    }

    #[test]
    fn test_report_contains_totals() {
        let report = generate_fleet_report(&summarize_fleet(&fleet()));
        assert!(report.contains("Vehicles:            3"));
        assert!(report.contains("Trucks:              1"));
        assert!(report.contains("Moving:              1"));
        assert!(report.contains("Passengers aboard:   2"));
        assert!(report.contains("Cargo aboard:        950.00"));
        assert!(report.contains("950/1000 near full"));
        assert!(report.contains("2 seats free"));
    }

    #[test]
    fn test_empty_report() {
        let report = generate_fleet_report(&[]);
        assert!(report.contains("Vehicles:            0"));
        assert!(report.contains("[No vehicles]"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 11), "short");
        assert_eq!(truncate_str("a-very-long-name", 11), "a-very-lo..");
    }
}
