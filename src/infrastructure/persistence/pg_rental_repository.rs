//! PostgreSQL implementation of rental repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRental, Rental};
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: i64,
    customer_id: i64,
    car_id: i64,
    rental_start: DateTime<Utc>,
    rental_end: Option<DateTime<Utc>>,
}

impl From<RentalRow> for Rental {
    fn from(row: RentalRow) -> Self {
        Rental::new(
            row.id,
            row.customer_id,
            row.car_id,
            row.rental_start,
            row.rental_end,
        )
    }
}

/// PostgreSQL repository for rentals.
///
/// The `rentals_no_double_booking` exclusion constraint rejects overlapping
/// rows of the same car; such failures surface as [`AppError::Conflict`]
/// through [`crate::error::map_sqlx_error`].
pub struct PgRentalRepository {
    pool: Arc<PgPool>,
}

impl PgRentalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn create(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(
            "INSERT INTO rentals (customer_id, car_id, rental_start, rental_end)
             VALUES ($1, $2, $3, $4)
             RETURNING id, customer_id, car_id, rental_start, rental_end",
        )
        .bind(new_rental.customer_id)
        .bind(new_rental.car_id)
        .bind(new_rental.rental_start)
        .bind(new_rental.rental_end)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(
            "SELECT id, customer_id, car_id, rental_start, rental_end FROM rentals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Rental::from))
    }

    async fn list(&self) -> Result<Vec<Rental>, AppError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            "SELECT id, customer_id, car_id, rental_start, rental_end FROM rentals ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn list_for_car(&self, car_id: i64) -> Result<Vec<Rental>, AppError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            "SELECT id, customer_id, car_id, rental_start, rental_end FROM rentals
             WHERE car_id = $1
             ORDER BY rental_start, id",
        )
        .bind(car_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn list_active_at(&self, at: DateTime<Utc>) -> Result<Vec<Rental>, AppError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            "SELECT id, customer_id, car_id, rental_start, rental_end FROM rentals
             WHERE rental_start <= $1
               AND (rental_end IS NULL OR rental_end >= $1)
             ORDER BY id",
        )
        .bind(at)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn update(&self, id: i64, rental: NewRental) -> Result<Option<Rental>, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(
            "UPDATE rentals SET
                 customer_id  = $2,
                 car_id       = $3,
                 rental_start = $4,
                 rental_end   = $5
             WHERE id = $1
             RETURNING id, customer_id, car_id, rental_start, rental_end",
        )
        .bind(id)
        .bind(rental.customer_id)
        .bind(rental.car_id)
        .bind(rental.rental_start)
        .bind(rental.rental_end)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Rental::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
