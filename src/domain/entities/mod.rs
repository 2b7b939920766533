//! Core domain entities.
//!
//! Entities are plain data structures. Each has a separate input struct used
//! for inserts and full-field updates:
//!
//! - [`Customer`] / [`NewCustomer`]
//! - [`Car`] / [`NewCar`]
//! - [`Rental`] / [`NewRental`]

pub mod car;
pub mod customer;
pub mod rental;

pub use car::{Car, NewCar};
pub use customer::{Customer, NewCustomer};
pub use rental::{NewRental, Rental};
