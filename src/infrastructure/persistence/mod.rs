//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through [`sqlx::FromRow`] row structs.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customer storage
//! - [`PgCarRepository`] - Car storage
//! - [`PgRentalRepository`] - Rental storage and period queries

pub mod pg_car_repository;
pub mod pg_customer_repository;
pub mod pg_rental_repository;

pub use pg_car_repository::PgCarRepository;
pub use pg_customer_repository::PgCustomerRepository;
pub use pg_rental_repository::PgRentalRepository;

use sqlx::PgPool;

/// Round-trips a trivial query to verify the pool can reach the database.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
