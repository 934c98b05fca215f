//! Route definitions for the bug CRUD endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bugs;
use crate::state::AppState;

/// Bug routes.
///
/// ```text
/// GET    /all-bugs      -> list
/// POST   /new-bug       -> create
/// GET    /bug/{id}      -> get_by_id
/// PUT    /bug/{id}      -> update
/// DELETE /bug/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all-bugs", get(bugs::list))
        .route("/new-bug", post(bugs::create))
        .route(
            "/bug/{id}",
            get(bugs::get_by_id).put(bugs::update).delete(bugs::delete),
        )
}
