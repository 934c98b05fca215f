//! Shared response envelope types for API handlers.
//!
//! Mutation endpoints respond with a `{ "message": ... }` body. Use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!({ "message": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "message": ... }` response body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
