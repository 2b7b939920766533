//! DTOs for customer endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Customer, NewCustomer};

/// Request body for `POST /customers` and `PUT /customers/{id}`.
///
/// `PUT` replaces every field, so both endpoints take the same shape.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
}

impl From<CustomerRequest> for NewCustomer {
    fn from(req: CustomerRequest) -> Self {
        NewCustomer { name: req.name }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerItem {
    pub id: i64,
    pub name: String,
}

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        CustomerItem {
            id: c.id,
            name: c.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let req = CustomerRequest {
            name: String::new(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_name_is_accepted() {
        let req: CustomerRequest = serde_json::from_str(r#"{"name": "Ola Nordmann"}"#).unwrap();

        assert!(req.validate().is_ok());
    }
}
