//! Repository trait for rental data access.

use chrono::{DateTime, Utc};

use crate::domain::entities::{NewRental, Rental};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for rentals.
///
/// The repository does not apply the double-booking rules itself; callers
/// check candidates with [`crate::domain::overlap::evaluate`] first. The
/// PostgreSQL schema additionally rejects overlapping rows of the same car,
/// so a write racing past the in-process check fails with
/// [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRentalRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_rental.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Inserts a rental.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the store detects a double booking.
    /// Returns [`AppError::Validation`] if the customer or car does not exist.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_rental: NewRental) -> Result<Rental, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, AppError>;

    /// Lists every rental ordered by id.
    async fn list(&self) -> Result<Vec<Rental>, AppError>;

    /// Lists every rental of one car, regardless of customer.
    async fn list_for_car(&self, car_id: i64) -> Result<Vec<Rental>, AppError>;

    /// Lists rentals with `rental_start <= at` and an end that is either
    /// absent or `>= at`.
    async fn list_active_at(&self, at: DateTime<Utc>) -> Result<Vec<Rental>, AppError>;

    /// Replaces all fields of a rental. `Ok(None)` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Same as [`RentalRepository::create`].
    async fn update(&self, id: i64, rental: NewRental) -> Result<Option<Rental>, AppError>;

    /// Deletes a rental. `Ok(false)` if the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
