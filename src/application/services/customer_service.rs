//! Customer management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Service for creating, listing, replacing and deleting customers.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let customer = self.repository.create(new_customer).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.list().await
    }

    /// Replaces the customer's fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this id.
    pub async fn update_customer(
        &self,
        id: i64,
        customer: NewCustomer,
    ) -> Result<Customer, AppError> {
        let updated = self
            .repository
            .update(id, customer)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(customer_id = id, "Customer updated");
        Ok(updated)
    }

    /// Deletes the customer and, through the store, its rentals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this id.
    pub async fn delete_customer(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Customer not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;

    #[tokio::test]
    async fn test_create_customer() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_create()
            .withf(|c| c.name == "Ola")
            .times(1)
            .returning(|c| Ok(Customer::new(1, c.name)));

        let service = CustomerService::new(Arc::new(mock_repo));

        let customer = service
            .create_customer(NewCustomer {
                name: "Ola".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(customer, Customer::new(1, "Ola".to_string()));
    }

    #[tokio::test]
    async fn test_update_customer_replaces_name() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, c| *id == 4 && c.name == "Renamed")
            .times(1)
            .returning(|id, c| Ok(Some(Customer::new(id, c.name))));

        let service = CustomerService::new(Arc::new(mock_repo));

        let customer = service
            .update_customer(
                4,
                NewCustomer {
                    name: "Renamed".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(customer.name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_customer_not_found() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service
            .update_customer(
                99,
                NewCustomer {
                    name: "Ghost".to_string(),
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_customer_not_found() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service.delete_customer(99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_customer_success() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(true));

        let service = CustomerService::new(Arc::new(mock_repo));

        assert!(service.delete_customer(2).await.is_ok());
    }
}
