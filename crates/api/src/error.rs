use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bugtrail_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a storage variant carrying
/// the per-operation public message alongside the underlying driver error.
/// Implements [`IntoResponse`] to produce consistent `{"message": ...}` JSON
/// error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bugtrail_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure. `message` is what the caller sees; the full
    /// `sqlx::Error` is only ever logged.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` closure attaching an operation-specific public
    /// message to a storage failure.
    pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Storage { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },
            AppError::Storage { message, source } => {
                // Callers get the sanitized message; the driver error stays
                // in the server log.
                tracing::error!(error = %source, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }
        };

        let body = json!({ "message": message });

        (status, axum::Json(body)).into_response()
    }
}
