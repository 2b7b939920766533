//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod cars;
pub mod customers;
pub mod health;
pub mod rentals;
pub mod welcome;

pub use cars::{create_car_handler, delete_car_handler, list_cars_handler, update_car_handler};
pub use customers::{
    create_customer_handler, delete_customer_handler, list_customers_handler,
    update_customer_handler,
};
pub use health::health_handler;
pub use rentals::{
    active_rentals_handler, create_rental_handler, delete_rental_handler, list_rentals_handler,
    update_rental_handler,
};
pub use welcome::welcome_handler;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Builds a `201 Created` response with a `Location` header.
pub(crate) fn created(location: String, body: impl IntoResponse) -> Response {
    match HeaderValue::from_str(&location) {
        Ok(value) => (StatusCode::CREATED, [(header::LOCATION, value)], body).into_response(),
        Err(_) => (StatusCode::CREATED, body).into_response(),
    }
}
