//! Shared API key check for mutating requests.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Fixed message MAC'd under each key; equal keys give equal tags.
const KEY_PROBE: &[u8] = b"car-rental-api:x-api-key";

/// Authorizes requests carrying the configured shared secret.
///
/// The secret is injected at construction. Presented keys are compared by
/// verifying an HMAC-SHA256 tag in constant time, so the comparison does not
/// leak how many leading bytes matched.
pub struct AuthService {
    expected_tag: Vec<u8>,
}

impl AuthService {
    /// Creates the gate for `api_key`.
    pub fn new(api_key: &str) -> Self {
        Self {
            expected_tag: tag_for(api_key).finalize().into_bytes().to_vec(),
        }
    }

    /// Checks a presented key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if `presented` is missing or differs
    /// from the configured key.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), AppError> {
        let Some(key) = presented else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "X-API-Key header is missing" }),
            ));
        };

        tag_for(key).verify_slice(&self.expected_tag).map_err(|_| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid API key" }))
        })
    }
}

fn tag_for(key: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(KEY_PROBE);
    mac
}
