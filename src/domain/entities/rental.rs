//! Rental entity linking a customer to a car for a period of time.

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::overlap::RentalPeriod;

/// A rental of one car by one customer.
///
/// `rental_end: None` marks an open-ended rental: the car is out and has not
/// been returned. Customer and car are referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    pub id: i64,
    pub customer_id: i64,
    pub car_id: i64,
    pub rental_start: DateTime<Utc>,
    pub rental_end: Option<DateTime<Utc>>,
}

impl Rental {
    pub fn new(
        id: i64,
        customer_id: i64,
        car_id: i64,
        rental_start: DateTime<Utc>,
        rental_end: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            customer_id,
            car_id,
            rental_start,
            rental_end,
        }
    }

    pub fn period(&self) -> RentalPeriod {
        RentalPeriod::new(self.rental_start, self.rental_end)
    }

    /// Returns true if the rental has no recorded return.
    pub fn is_open_ended(&self) -> bool {
        self.rental_end.is_none()
    }

    /// Returns true if `at` falls inside the rental, both ends inclusive.
    ///
    /// Open-ended rentals are active from their start onwards.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.rental_start <= at && self.rental_end.is_none_or(|end| at <= end)
    }
}

/// Input for creating a rental or replacing all of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRental {
    pub customer_id: i64,
    pub car_id: i64,
    pub rental_start: DateTime<Utc>,
    pub rental_end: Option<DateTime<Utc>>,
}

/// Fractional-second digits PostgreSQL keeps in a `timestamptz`.
const STORE_SUBSEC_DIGITS: u16 = 6;

impl NewRental {
    pub fn period(&self) -> RentalPeriod {
        RentalPeriod::new(self.rental_start, self.rental_end)
    }

    /// Truncates both timestamps to microseconds, the precision they are
    /// stored with, so the overlap rules judge the values that get written.
    pub fn at_store_precision(self) -> Self {
        Self {
            rental_start: self.rental_start.trunc_subsecs(STORE_SUBSEC_DIGITS),
            rental_end: self
                .rental_end
                .map(|end| end.trunc_subsecs(STORE_SUBSEC_DIGITS)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn jan(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_rental_creation() {
        let rental = Rental::new(1, 10, 20, jan(1), Some(jan(10)));

        assert_eq!(rental.customer_id, 10);
        assert_eq!(rental.car_id, 20);
        assert!(!rental.is_open_ended());
        assert_eq!(rental.period(), RentalPeriod::new(jan(1), Some(jan(10))));
    }

    #[test]
    fn test_is_active_inside_and_on_boundaries() {
        let rental = Rental::new(1, 10, 20, jan(1), Some(jan(10)));

        assert!(rental.is_active_at(jan(1)));
        assert!(rental.is_active_at(jan(5)));
        assert!(rental.is_active_at(jan(10)));
    }

    #[test]
    fn test_is_active_outside() {
        let rental = Rental::new(1, 10, 20, jan(2), Some(jan(10)));

        assert!(!rental.is_active_at(jan(1)));
        assert!(!rental.is_active_at(jan(10) + Duration::seconds(1)));
    }

    #[test]
    fn test_store_precision_drops_nanoseconds() {
        let rental = NewRental {
            customer_id: 10,
            car_id: 20,
            rental_start: jan(10) + Duration::nanoseconds(500),
            rental_end: Some(jan(20) + Duration::nanoseconds(1_999)),
        }
        .at_store_precision();

        assert_eq!(rental.rental_start, jan(10));
        assert_eq!(rental.rental_end, Some(jan(20) + Duration::microseconds(1)));
    }

    #[test]
    fn test_store_precision_keeps_microseconds() {
        let start = jan(1) + Duration::microseconds(123_456);
        let rental = NewRental {
            customer_id: 10,
            car_id: 20,
            rental_start: start,
            rental_end: None,
        }
        .at_store_precision();

        assert_eq!(rental.rental_start, start);
        assert!(rental.rental_end.is_none());
    }

    #[test]
    fn test_open_ended_rental_is_active_after_start() {
        let rental = Rental::new(1, 10, 20, jan(1), None);

        assert!(rental.is_open_ended());
        assert!(rental.is_active_at(jan(1) + Duration::days(3650)));
        assert!(!rental.is_active_at(jan(1) - Duration::seconds(1)));
    }
}
