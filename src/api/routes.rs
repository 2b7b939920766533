//! API route configuration.
//!
//! Reads and creates are public. Every `PUT` and `DELETE` goes through
//! [`crate::api::middleware::api_key`].

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::api::handlers::{
    active_rentals_handler, create_car_handler, create_customer_handler, create_rental_handler,
    delete_car_handler, delete_customer_handler, delete_rental_handler, health_handler,
    list_cars_handler, list_customers_handler, list_rentals_handler, update_car_handler,
    update_customer_handler, update_rental_handler, welcome_handler,
};
use crate::api::middleware::api_key;
use crate::state::AppState;

/// Unauthenticated routes.
///
/// # Endpoints
///
/// - `GET  /`                - Welcome text
/// - `GET  /health`          - Database health check
/// - `GET  /customers`       - List customers
/// - `POST /customers`       - Create a customer
/// - `GET  /cars`            - List cars
/// - `POST /cars`            - Create a car
/// - `POST /rentals`         - Book a car (double-booking checked)
/// - `GET  /rentals/all`     - List all rentals
/// - `GET  /rentals/active`  - List rentals in progress now
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .route("/cars", get(list_cars_handler).post(create_car_handler))
        .route("/rentals", post(create_rental_handler))
        .route("/rentals/all", get(list_rentals_handler))
        .route("/rentals/active", get(active_rentals_handler))
}

/// Mutating routes, protected by the `X-API-Key` gate.
///
/// # Endpoints
///
/// - `PUT    /customers/{id}` - Replace a customer
/// - `DELETE /customers/{id}` - Delete a customer
/// - `PUT    /cars/{id}`      - Replace a car
/// - `DELETE /cars/{id}`      - Delete a car
/// - `PUT    /rentals/{id}`   - Replace a rental (double-booking re-checked)
/// - `DELETE /rentals/{id}`   - Delete a rental
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers/{id}",
            put(update_customer_handler).delete(delete_customer_handler),
        )
        .route(
            "/cars/{id}",
            put(update_car_handler).delete(delete_car_handler),
        )
        .route(
            "/rentals/{id}",
            put(update_rental_handler).delete(delete_rental_handler),
        )
}

/// Public and protected routes merged, with state applied.
pub fn router(state: AppState) -> Router {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), api_key::layer));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .with_state(state)
}
