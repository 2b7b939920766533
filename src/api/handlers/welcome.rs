//! Handler for the root endpoint.

/// Returns a static welcome text.
///
/// # Endpoint
///
/// `GET /`
pub async fn welcome_handler() -> &'static str {
    "Welcome to the Car Rental API!"
}
