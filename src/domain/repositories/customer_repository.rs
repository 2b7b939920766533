//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Inserts a customer; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Finds a customer by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Lists every customer ordered by id.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;

    /// Replaces all mutable fields of a customer.
    ///
    /// Returns `Ok(None)` if no customer has this id.
    async fn update(&self, id: i64, customer: NewCustomer) -> Result<Option<Customer>, AppError>;

    /// Deletes a customer together with its rentals.
    ///
    /// Returns `Ok(false)` if no customer has this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
