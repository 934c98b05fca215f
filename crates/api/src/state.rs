use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only cross-request resource the service holds; handlers
/// borrow it per request and keep no state of their own.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bugtrail_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
