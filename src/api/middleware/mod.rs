//! HTTP middleware for request processing and protection.
//!
//! Provides the API key gate and request tracing.

pub mod api_key;
pub mod tracing;
