mod common;

use car_rental_api::domain::entities::NewCar;
use car_rental_api::domain::repositories::CarRepository;
use car_rental_api::infrastructure::persistence::PgCarRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_car(pool: PgPool) {
    let repo = PgCarRepository::new(Arc::new(pool));

    let car = repo
        .create(NewCar {
            model: "Tesla Model 3".to_string(),
        })
        .await
        .unwrap();

    assert!(car.id > 0);
    assert_eq!(car.model, "Tesla Model 3");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing_car(pool: PgPool) {
    let repo = PgCarRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(12345).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_car_cascades_to_rentals(pool: PgPool) {
    let customer_id = common::create_test_customer(&pool, "Kari").await;
    let car_id = common::create_test_car(&pool, "Nissan Leaf").await;
    common::create_test_rental(
        &pool,
        customer_id,
        car_id,
        common::day(1),
        Some(common::day(3)),
    )
    .await;

    let repo = PgCarRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(car_id).await.unwrap());
    assert_eq!(common::count_rentals(&pool).await, 0);
}
