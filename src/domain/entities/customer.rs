//! Customer entity.

/// A person who rents cars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

impl Customer {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Input for creating a customer or replacing its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new(3, "Kari Nordmann".to_string());

        assert_eq!(customer.id, 3);
        assert_eq!(customer.name, "Kari Nordmann");
    }
}
