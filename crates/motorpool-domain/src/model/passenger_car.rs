//! Passenger cabin: seat count and passenger boarding

use serde::Serialize;
use motorpool_types::VehicleError;

use super::vehicle::require_finite;

/// Smallest allowed seat count (driver only)
pub const MIN_SEATS: u8 = 1;
/// Largest allowed seat count
pub const MAX_SEATS: u8 = 6;

/// Seating of a passenger car. One seat is always reserved for the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cabin {
    seat_count: u8,
    available_passenger_seats: u8,
}

impl Cabin {
    pub fn new(seat_count: u8) -> Result<Self, VehicleError> {
        if !(MIN_SEATS..=MAX_SEATS).contains(&seat_count) {
            return Err(seat_count_out_of_range(i64::from(seat_count)));
        }
        Ok(Self {
            seat_count,
            available_passenger_seats: seat_count - 1,
        })
    }

    pub fn seat_count(&self) -> u8 {
        self.seat_count
    }

    /// Seats available to passengers when the cabin is empty
    pub fn passenger_capacity(&self) -> u8 {
        self.seat_count - 1
    }

    pub fn available_passenger_seats(&self) -> u8 {
        self.available_passenger_seats
    }

    pub fn passengers_aboard(&self) -> u8 {
        self.passenger_capacity() - self.available_passenger_seats
    }

    pub fn is_full(&self) -> bool {
        self.available_passenger_seats == 0
    }

    pub fn is_empty(&self) -> bool {
        self.available_passenger_seats == self.passenger_capacity()
    }

    pub fn board(&mut self) -> Result<u8, VehicleError> {
        if self.is_full() {
            return Err(VehicleError::VehicleFull);
        }
        self.available_passenger_seats -= 1;
        Ok(self.available_passenger_seats)
    }

    pub fn disembark(&mut self) -> Result<u8, VehicleError> {
        if self.is_empty() {
            return Err(VehicleError::CabinEmpty);
        }
        self.available_passenger_seats += 1;
        Ok(self.available_passenger_seats)
    }
}

/// Convert an untyped number (e.g. from a config file) into a seat count.
///
/// Fractional values are a type error; whole numbers outside
/// `MIN_SEATS..=MAX_SEATS` are a validation error.
pub fn seat_count_from_number(value: f64) -> Result<u8, VehicleError> {
    let value = require_finite(value, "seat count")?;
    if value.fract() != 0.0 {
        return Err(VehicleError::NotAnInteger {
            field: "seat count",
            value,
        });
    }
    if value < f64::from(MIN_SEATS) || value > f64::from(MAX_SEATS) {
        return Err(seat_count_out_of_range(value as i64));
    }
    Ok(value as u8)
}

fn seat_count_out_of_range(value: i64) -> VehicleError {
    VehicleError::SeatCountOutOfRange {
        value,
        min: MIN_SEATS,
        max: MAX_SEATS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorpool_types::ErrorKind;

    #[test]
    fn test_driver_seat_is_reserved() {
        let cabin = Cabin::new(4).unwrap();
        assert_eq!(cabin.seat_count(), 4);
        assert_eq!(cabin.available_passenger_seats(), 3);
        assert!(cabin.is_empty());
        assert!(!cabin.is_full());
    }

    #[test]
    fn test_seat_count_bounds() {
        assert!(Cabin::new(1).is_ok());
        assert!(Cabin::new(6).is_ok());
        assert_eq!(Cabin::new(0).unwrap_err(), seat_count_out_of_range(0));
        assert_eq!(
            Cabin::new(7).unwrap_err().to_string(),
            "seat count must be between 1 and 6, got 7"
        );
    }

    #[test]
    fn test_driver_only_car_is_full_and_empty() {
        let mut cabin = Cabin::new(1).unwrap();
        assert!(cabin.is_full());
        assert!(cabin.is_empty());
        assert_eq!(cabin.board().unwrap_err(), VehicleError::VehicleFull);
        assert_eq!(cabin.disembark().unwrap_err(), VehicleError::CabinEmpty);
    }

    #[test]
    fn test_board_until_full_then_disembark_until_empty() {
        let mut cabin = Cabin::new(4).unwrap();
        assert_eq!(cabin.board().unwrap(), 2);
        assert_eq!(cabin.board().unwrap(), 1);
        assert_eq!(cabin.board().unwrap(), 0);
        assert_eq!(cabin.passengers_aboard(), 3);
        assert_eq!(cabin.board().unwrap_err(), VehicleError::VehicleFull);
        assert_eq!(cabin.available_passenger_seats(), 0);

        assert_eq!(cabin.disembark().unwrap(), 1);
        assert_eq!(cabin.disembark().unwrap(), 2);
        assert_eq!(cabin.disembark().unwrap(), 3);
        assert_eq!(cabin.disembark().unwrap_err(), VehicleError::CabinEmpty);
        assert_eq!(cabin.available_passenger_seats(), 3);
    }

    #[test]
    fn test_seat_count_from_number() {
        assert_eq!(seat_count_from_number(5.0).unwrap(), 5);

        let err = seat_count_from_number(3.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        assert_eq!(
            seat_count_from_number(7.0).unwrap_err(),
            seat_count_out_of_range(7)
        );
        assert_eq!(
            seat_count_from_number(0.0).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            seat_count_from_number(f64::INFINITY).unwrap_err().kind(),
            ErrorKind::Type
        );
    }
}
