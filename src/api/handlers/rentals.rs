//! Handlers for rental endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use chrono::Utc;

use crate::api::dto::rental::{RentalItem, RentalRequest};
use crate::api::handlers::created;
use crate::error::AppError;
use crate::state::AppState;

/// Books a car.
///
/// # Endpoint
///
/// `POST /rentals`
///
/// # Request Body
///
/// ```json
/// {
///   "customerId": 1,
///   "carId": 1,
///   "rentalStart": "2025-01-01T00:00:00Z",
///   "rentalEnd": "2025-01-10T00:00:00Z"   // optional, absent = open-ended
/// }
/// ```
///
/// # Errors
///
/// - 400 (`invalid_interval`) if `rentalEnd` is not after `rentalStart`
/// - 409 (`same_customer_overlap`) if the customer already has this car in an
///   overlapping period
/// - 409 (`car_in_use`) if another customer has this car in an overlapping period
pub async fn create_rental_handler(
    State(state): State<AppState>,
    Json(payload): Json<RentalRequest>,
) -> Result<Response, AppError> {
    let rental = state.rental_service.create_rental(payload.into()).await?;

    Ok(created(
        format!("/rentals/{}", rental.id),
        Json(RentalItem::from(rental)),
    ))
}

/// Lists every rental.
///
/// # Endpoint
///
/// `GET /rentals/all`
pub async fn list_rentals_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalItem>>, AppError> {
    let rentals = state.rental_service.list_rentals().await?;

    Ok(Json(rentals.into_iter().map(RentalItem::from).collect()))
}

/// Lists rentals in progress right now.
///
/// # Endpoint
///
/// `GET /rentals/active`
///
/// A rental is active when it has started and has either not ended yet or
/// has no recorded end.
pub async fn active_rentals_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalItem>>, AppError> {
    let rentals = state.rental_service.list_active_rentals(Utc::now()).await?;

    Ok(Json(rentals.into_iter().map(RentalItem::from).collect()))
}

/// Replaces every field of a rental.
///
/// # Endpoint
///
/// `PUT /rentals/{id}` (requires `X-API-Key`)
///
/// # Errors
///
/// - 404 if the rental does not exist
/// - 400 / 409 as for [`create_rental_handler`]
pub async fn update_rental_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<RentalRequest>,
) -> Result<Json<RentalItem>, AppError> {
    let rental = state
        .rental_service
        .update_rental(id, payload.into())
        .await?;

    Ok(Json(rental.into()))
}

/// `DELETE /rentals/{id}` (requires `X-API-Key`)
pub async fn delete_rental_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.rental_service.delete_rental(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
