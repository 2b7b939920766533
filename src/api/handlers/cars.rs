//! Handlers for car endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use validator::Validate;

use crate::api::dto::car::{CarItem, CarRequest};
use crate::api::handlers::created;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /cars`
pub async fn create_car_handler(
    State(state): State<AppState>,
    Json(payload): Json<CarRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let car = state.car_service.create_car(payload.into()).await?;

    Ok(created(format!("/cars/{}", car.id), Json(CarItem::from(car))))
}

/// `GET /cars`
pub async fn list_cars_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarItem>>, AppError> {
    let cars = state.car_service.list_cars().await?;

    Ok(Json(cars.into_iter().map(CarItem::from).collect()))
}

/// `PUT /cars/{id}` (requires `X-API-Key`)
pub async fn update_car_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CarRequest>,
) -> Result<Json<CarItem>, AppError> {
    payload.validate()?;

    let car = state.car_service.update_car(id, payload.into()).await?;

    Ok(Json(car.into()))
}

/// `DELETE /cars/{id}` (requires `X-API-Key`)
pub async fn delete_car_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.car_service.delete_car(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
