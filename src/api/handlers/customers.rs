//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use validator::Validate;

use crate::api::dto::customer::{CustomerItem, CustomerRequest};
use crate::api::handlers::created;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a customer.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Errors
///
/// Returns 400 if `name` is empty.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    Json(payload): Json<CustomerRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let customer = state
        .customer_service
        .create_customer(payload.into())
        .await?;

    Ok(created(
        format!("/customers/{}", customer.id),
        Json(CustomerItem::from(customer)),
    ))
}

/// Lists all customers.
///
/// # Endpoint
///
/// `GET /customers`
pub async fn list_customers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerItem>>, AppError> {
    let customers = state.customer_service.list_customers().await?;

    Ok(Json(customers.into_iter().map(CustomerItem::from).collect()))
}

/// Replaces a customer's fields.
///
/// # Endpoint
///
/// `PUT /customers/{id}` (requires `X-API-Key`)
///
/// # Errors
///
/// Returns 404 if the customer does not exist.
pub async fn update_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CustomerRequest>,
) -> Result<Json<CustomerItem>, AppError> {
    payload.validate()?;

    let customer = state
        .customer_service
        .update_customer(id, payload.into())
        .await?;

    Ok(Json(customer.into()))
}

/// Deletes a customer and its rentals.
///
/// # Endpoint
///
/// `DELETE /customers/{id}` (requires `X-API-Key`)
pub async fn delete_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.customer_service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
