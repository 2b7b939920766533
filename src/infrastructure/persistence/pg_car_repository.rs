//! PostgreSQL implementation of car repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Car, NewCar};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CarRow {
    id: i64,
    model: String,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car::new(row.id, row.model)
    }
}

/// PostgreSQL repository for the car fleet.
pub struct PgCarRepository {
    pool: Arc<PgPool>,
}

impl PgCarRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let row =
            sqlx::query_as::<_, CarRow>("INSERT INTO cars (model) VALUES ($1) RETURNING id, model")
                .bind(new_car.model)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>("SELECT id, model FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Car::from))
    }

    async fn list(&self) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query_as::<_, CarRow>("SELECT id, model FROM cars ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn update(&self, id: i64, car: NewCar) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            "UPDATE cars SET model = $2 WHERE id = $1 RETURNING id, model",
        )
        .bind(id)
        .bind(car.model)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Car::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
