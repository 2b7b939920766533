//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single allowed origin, when configured
//! - **Authentication** - `X-API-Key` on `PUT`/`DELETE` routes
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::http::HeaderValue;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allowed_origin` - when set, browsers on this origin may call the
///   API with any method and header
pub fn app_router(state: AppState, cors_allowed_origin: Option<&str>) -> NormalizePath<Router> {
    let mut router = api::routes::router(state).layer(tracing::layer());

    if let Some(origin) = cors_allowed_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_methods(Any)
                        .allow_headers(Any),
                );
            }
            Err(_) => ::tracing::warn!(origin, "Ignoring invalid CORS origin"),
        }
    }

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::application::services::{AuthService, CarService, CustomerService, RentalService};
    use crate::domain::entities::Car;
    use crate::domain::repositories::{
        MockCarRepository, MockCustomerRepository, MockRentalRepository,
    };

    fn state(cars: MockCarRepository) -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        AppState {
            customer_service: Arc::new(CustomerService::new(Arc::new(
                MockCustomerRepository::new(),
            ))),
            car_service: Arc::new(CarService::new(Arc::new(cars))),
            rental_service: Arc::new(RentalService::new(Arc::new(MockRentalRepository::new()))),
            auth_service: Arc::new(AuthService::new("mysecret123")),
            db: Arc::new(pool),
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let mut cars = MockCarRepository::new();
        cars.expect_list()
            .times(1)
            .returning(|| Ok(vec![Car::new(1, "Volvo XC40".to_string())]));
        let app = app_router(state(cars), None);

        let response = app
            .oneshot(Request::get("/cars/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let app = app_router(
            state(MockCarRepository::new()),
            Some("http://localhost:5163"),
        );

        let response = app
            .oneshot(
                Request::options("/customers")
                    .header(header::ORIGIN, "http://localhost:5163")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5163"
        );
    }

    #[tokio::test]
    async fn test_no_cors_headers_without_origin() {
        let app = app_router(state(MockCarRepository::new()), None);

        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::ORIGIN, "http://localhost:5163")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
