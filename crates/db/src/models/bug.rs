//! Bug entity model and DTOs.

use bugtrail_core::types::BugId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `bugs` table.
///
/// The wire shape is exactly these four keys; the table's bookkeeping
/// timestamps are never selected into this struct.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bug {
    pub id: BugId,
    pub name: String,
    pub description: String,
    pub category: String,
}

/// DTO for creating a new bug.
///
/// Fields are optional at the serde level so that presence and
/// non-emptiness can be validated with a single descriptive error instead
/// of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBug {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// DTO for partially updating a bug. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct BugPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}
