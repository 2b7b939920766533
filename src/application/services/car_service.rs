//! Fleet management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Car, NewCar};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

/// Service for creating, listing, replacing and deleting cars.
pub struct CarService {
    repository: Arc<dyn CarRepository>,
}

impl CarService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_car(&self, new_car: NewCar) -> Result<Car, AppError> {
        let car = self.repository.create(new_car).await?;
        tracing::info!(car_id = car.id, model = %car.model, "Car created");
        Ok(car)
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no car has this id.
    pub async fn update_car(&self, id: i64, car: NewCar) -> Result<Car, AppError> {
        let updated = self
            .repository
            .update(id, car)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(car_id = id, "Car updated");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no car has this id.
    pub async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(car_id = id, "Car deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Car not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCarRepository;

    #[tokio::test]
    async fn test_list_cars() {
        let mut mock_repo = MockCarRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                Car::new(1, "Tesla Model 3".to_string()),
                Car::new(2, "Volvo XC40".to_string()),
            ])
        });

        let service = CarService::new(Arc::new(mock_repo));

        let cars = service.list_cars().await.unwrap();

        assert_eq!(cars.len(), 2);
        assert_eq!(cars[1].model, "Volvo XC40");
    }

    #[tokio::test]
    async fn test_update_car_not_found() {
        let mut mock_repo = MockCarRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = CarService::new(Arc::new(mock_repo));

        let result = service
            .update_car(
                5,
                NewCar {
                    model: "Nissan Leaf".to_string(),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_car_propagates_database_error() {
        let mut mock_repo = MockCarRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = CarService::new(Arc::new(mock_repo));

        let result = service.delete_car(1).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
