//! DTOs for car endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Car, NewCar};

/// Request body for `POST /cars` and `PUT /cars/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CarRequest {
    #[validate(length(min = 1, max = 200, message = "Model must be 1-200 characters"))]
    pub model: String,
}

impl From<CarRequest> for NewCar {
    fn from(req: CarRequest) -> Self {
        NewCar { model: req.model }
    }
}

#[derive(Debug, Serialize)]
pub struct CarItem {
    pub id: i64,
    pub model: String,
}

impl From<Car> for CarItem {
    fn from(c: Car) -> Self {
        CarItem {
            id: c.id,
            model: c.model,
        }
    }
}
