//! Handlers for the bug CRUD endpoints.
//!
//! Every handler issues exactly one repository call. Storage failures are
//! mapped to a generic per-operation message (the driver error is logged,
//! never sent to the caller), and a missing id is a structured 404 on all
//! of get, update, and delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use bugtrail_core::bug;
use bugtrail_core::error::CoreError;
use bugtrail_core::types::BugId;
use bugtrail_db::models::bug::{Bug, BugPatch, NewBug};
use bugtrail_db::repositories::BugRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /all-bugs
// ---------------------------------------------------------------------------

/// List every bug.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Bug>>> {
    let bugs = BugRepo::list(&state.pool)
        .await
        .map_err(AppError::storage("Database error"))?;
    Ok(Json(bugs))
}

// ---------------------------------------------------------------------------
// GET /bug/{id}
// ---------------------------------------------------------------------------

/// Fetch a single bug by id.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<BugId>,
) -> AppResult<Json<Bug>> {
    let found = BugRepo::find_by_id(&state.pool, &id)
        .await
        .map_err(AppError::storage("Database error"))?;
    let bug = found.ok_or(AppError::Core(CoreError::NotFound { entity: "Bug", id }))?;
    Ok(Json(bug))
}

// ---------------------------------------------------------------------------
// POST /new-bug
// ---------------------------------------------------------------------------

/// Create a new bug.
///
/// Rejects requests with no JSON body outright, then requires non-empty
/// `name`, `description`, and `category` before anything is persisted.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<NewBug>>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Some(Json(input)) = body else {
        return Err(CoreError::Validation(bug::NO_DATA_MESSAGE.to_string()).into());
    };

    let (name, description, category) = bug::require_fields(
        input.name.as_deref(),
        input.description.as_deref(),
        input.category.as_deref(),
    )?;

    let created = BugRepo::create(&state.pool, name, description, category)
        .await
        .map_err(AppError::storage("An error occurred during bug creation"))?;

    tracing::info!(bug_id = %created.id, "Bug created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Bug added successfully")),
    ))
}

// ---------------------------------------------------------------------------
// PUT /bug/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update to a bug.
///
/// Only fields present in the body are written; the single UPDATE statement
/// returns no row when the id is unknown, which surfaces as a 404 before
/// the caller sees any success message.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<BugId>,
    Json(patch): Json<BugPatch>,
) -> AppResult<Json<MessageResponse>> {
    let updated = BugRepo::update(&state.pool, &id, &patch)
        .await
        .map_err(AppError::storage("An error occurred during bug update"))?;
    if updated.is_none() {
        return Err(AppError::Core(CoreError::NotFound { entity: "Bug", id }));
    }

    tracing::info!(bug_id = %id, "Bug updated");

    Ok(Json(MessageResponse::new("Bug updated successfully")))
}

// ---------------------------------------------------------------------------
// DELETE /bug/{id}
// ---------------------------------------------------------------------------

/// Delete a bug by id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<BugId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = BugRepo::delete(&state.pool, &id)
        .await
        .map_err(AppError::storage("An error occurred during deletion"))?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Bug", id }));
    }

    tracing::info!(bug_id = %id, "Bug deleted");

    Ok(Json(MessageResponse::new("Bug deleted successfully")))
}
