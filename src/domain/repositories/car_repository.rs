//! Repository trait for car data access.

use crate::domain::entities::{Car, NewCar};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing the car fleet.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCarRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError>;

    async fn list(&self) -> Result<Vec<Car>, AppError>;

    /// Replaces all mutable fields of a car. `Ok(None)` if the id is unknown.
    async fn update(&self, id: i64, car: NewCar) -> Result<Option<Car>, AppError>;

    /// Deletes a car together with its rentals. `Ok(false)` if the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
