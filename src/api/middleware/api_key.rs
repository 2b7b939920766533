//! `X-API-Key` authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests whose `X-API-Key` header does not match the configured key.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <shared secret>
/// ```
///
/// Runs before the handler, so an unauthorized request never reads its body
/// or touches the store.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8, or
/// does not match.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/customers/{id}", put(update_customer_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), api_key::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = st.auth_service.authorize(presented) {
        tracing::warn!(
            method = %req.method(),
            uri = %req.uri(),
            "Rejected request without a valid API key"
        );
        return Err(e);
    }

    Ok(next.run(req).await)
}
