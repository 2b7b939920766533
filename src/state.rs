//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, CarService, CustomerService, RentalService};

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub car_service: Arc<CarService>,
    pub rental_service: Arc<RentalService>,
    pub auth_service: Arc<AuthService>,
    pub db: Arc<PgPool>,
}
