pub mod bugs;
pub mod health;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / -- service banner. The body is part of the public surface;
/// clients probe it as a liveness smoke test.
async fn welcome() -> Json<Value> {
    Json(json!({ "Choo Choo": "Welcome to your Flask app 🚅" }))
}

/// Build the full route tree.
///
/// ```text
/// GET    /              -> welcome banner
/// GET    /health        -> service + database health
/// GET    /all-bugs      -> list
/// POST   /new-bug       -> create
/// GET    /bug/{id}      -> get_by_id
/// PUT    /bug/{id}      -> update
/// DELETE /bug/{id}      -> delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .merge(health::router())
        .merge(bugs::router())
}
