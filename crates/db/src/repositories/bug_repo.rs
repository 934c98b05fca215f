//! Repository for the `bugs` table.

use sqlx::PgPool;
use uuid::Uuid;

use bugtrail_core::types::BugId;

use crate::models::bug::{Bug, BugPatch};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, category";

/// Provides CRUD operations for bugs.
pub struct BugRepo;

impl BugRepo {
    /// Insert a new bug, returning the created row.
    ///
    /// The id is generated here as a random UUID and bound explicitly;
    /// it is never left to a column default.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: &str,
        category: &str,
    ) -> Result<Bug, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let query = format!(
            "INSERT INTO bugs (id, name, description, category)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bug>(&query)
            .bind(&id)
            .bind(name)
            .bind(description)
            .bind(category)
            .fetch_one(pool)
            .await
    }

    /// Find a bug by its id.
    pub async fn find_by_id(pool: &PgPool, id: &BugId) -> Result<Option<Bug>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bugs WHERE id = $1");
        sqlx::query_as::<_, Bug>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bugs, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Bug>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bugs ORDER BY created_at");
        sqlx::query_as::<_, Bug>(&query).fetch_all(pool).await
    }

    /// Apply a patch to a bug. Only non-`None` fields in `patch` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &BugId,
        patch: &BugPatch,
    ) -> Result<Option<Bug>, sqlx::Error> {
        let query = format!(
            "UPDATE bugs SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bug>(&query)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(&patch.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bug by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &BugId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bugs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
