//! DTOs for rental endpoints.
//!
//! Field names are camelCase (`customerId`, `rentalStart`, ...) to match the
//! wire format existing clients already send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewRental, Rental};

/// Request body for `POST /rentals` and `PUT /rentals/{id}`.
///
/// Omitting `rentalEnd` (or sending `null`) books the car open-ended.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub customer_id: i64,
    pub car_id: i64,
    pub rental_start: DateTime<Utc>,
    #[serde(default)]
    pub rental_end: Option<DateTime<Utc>>,
}

impl From<RentalRequest> for NewRental {
    fn from(req: RentalRequest) -> Self {
        NewRental {
            customer_id: req.customer_id,
            car_id: req.car_id,
            rental_start: req.rental_start,
            rental_end: req.rental_end,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalItem {
    pub id: i64,
    pub customer_id: i64,
    pub car_id: i64,
    pub rental_start: DateTime<Utc>,
    pub rental_end: Option<DateTime<Utc>>,
}

impl From<Rental> for RentalItem {
    fn from(r: Rental) -> Self {
        RentalItem {
            id: r.id,
            customer_id: r.customer_id,
            car_id: r.car_id,
            rental_start: r.rental_start,
            rental_end: r.rental_end,
        }
    }
}
