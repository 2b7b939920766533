//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customer management
//! - [`services::car_service::CarService`] - Fleet management
//! - [`services::rental_service::RentalService`] - Rentals and double-booking checks
//! - [`services::auth_service::AuthService`] - Shared API key check for mutating requests

pub mod services;
