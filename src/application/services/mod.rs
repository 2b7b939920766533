//! Business logic services for the application layer.

pub mod auth_service;
pub mod car_service;
pub mod customer_service;
pub mod rental_service;

pub use auth_service::AuthService;
pub use car_service::CarService;
pub use customer_service::CustomerService;
pub use rental_service::RentalService;
