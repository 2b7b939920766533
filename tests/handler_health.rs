mod common;

use axum_test::TestServer;
use car_rental_api::api::routes::router;
use sqlx::PgPool;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_endpoint_success(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}
