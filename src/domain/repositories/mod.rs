//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer CRUD
//! - [`CarRepository`] - Car CRUD
//! - [`RentalRepository`] - Rental CRUD plus per-car and active-period queries
//!
//! See integration tests in `tests/repository_*.rs` for usage against PostgreSQL.

pub mod car_repository;
pub mod customer_repository;
pub mod rental_repository;

pub use car_repository::CarRepository;
pub use customer_repository::CustomerRepository;
pub use rental_repository::RentalRepository;

#[cfg(test)]
pub use car_repository::MockCarRepository;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use rental_repository::MockRentalRepository;
