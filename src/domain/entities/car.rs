//! Car entity.

/// A car in the rental fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub model: String,
}

impl Car {
    pub fn new(id: i64, model: String) -> Self {
        Self { id, model }
    }
}

/// Input for creating a car or replacing its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub model: String,
}
