#![allow(dead_code)]

use car_rental_api::application::services::{
    AuthService, CarService, CustomerService, RentalService,
};
use car_rental_api::infrastructure::persistence::{
    PgCarRepository, PgCustomerRepository, PgRentalRepository,
};
use car_rental_api::state::AppState;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

pub async fn create_test_customer(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO customers (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_car(pool: &PgPool, model: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO cars (model) VALUES ($1) RETURNING id")
        .bind(model)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_rental(
    pool: &PgPool,
    customer_id: i64,
    car_id: i64,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO rentals (customer_id, car_id, rental_start, rental_end) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(customer_id)
    .bind(car_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rentals(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM rentals")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState {
        customer_service: Arc::new(CustomerService::new(Arc::new(PgCustomerRepository::new(
            pool.clone(),
        )))),
        car_service: Arc::new(CarService::new(Arc::new(PgCarRepository::new(pool.clone())))),
        rental_service: Arc::new(RentalService::new(Arc::new(PgRentalRepository::new(
            pool.clone(),
        )))),
        auth_service: Arc::new(AuthService::new(TEST_API_KEY)),
        db: pool,
    }
}
