//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Customer, car and rental records
//! - [`overlap`] - Pure double-booking rules for rentals
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in
//! [`crate::infrastructure::persistence`]; orchestration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod overlap;
pub mod repositories;
