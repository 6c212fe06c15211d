//! Canvas directory — create, list, fetch, delete.
//!
//! DESIGN
//! ======
//! Canvases are plain rows: an id, a title, and a creation timestamp. They
//! are created and deleted only by explicit user action and never mutated
//! otherwise. Deleting a canvas cascades to its operation log at the schema
//! level, so no service code touches `drawing_operations` here.

use sqlx::PgPool;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("canvas not found: {0}")]
    NotFound(Uuid),
    #[error("canvas title must not be empty")]
    EmptyTitle,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A canvas directory row. `created_at` is ms since the Unix epoch.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Canvas {
    pub id: Uuid,
    pub title: String,
    pub created_at: i64,
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a new canvas. The title is trimmed; an empty result is rejected.
///
/// # Errors
///
/// Returns `EmptyTitle` for a blank title, or a database error if the
/// insert fails.
pub async fn create_canvas(pool: &PgPool, title: &str) -> Result<Canvas, DirectoryError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DirectoryError::EmptyTitle);
    }

    let id = Uuid::new_v4();
    let created_at: i64 = sqlx::query_scalar(
        "INSERT INTO canvases (id, title) VALUES ($1, $2)
         RETURNING (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
    )
    .bind(id)
    .bind(title)
    .fetch_one(pool)
    .await?;

    Ok(Canvas { id, title: title.to_string(), created_at })
}

/// List all canvases, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_canvases(pool: &PgPool) -> Result<Vec<Canvas>, DirectoryError> {
    let rows = sqlx::query_as::<_, (Uuid, String, i64)>(
        "SELECT id, title, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
         FROM canvases
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, title, created_at)| Canvas { id, title, created_at })
        .collect())
}

/// Fetch one canvas by id.
///
/// # Errors
///
/// Returns `NotFound` if the id does not resolve, or a database error if
/// the query fails.
pub async fn get_canvas(pool: &PgPool, canvas_id: Uuid) -> Result<Canvas, DirectoryError> {
    let row = sqlx::query_as::<_, (Uuid, String, i64)>(
        "SELECT id, title, (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
         FROM canvases
         WHERE id = $1",
    )
    .bind(canvas_id)
    .fetch_optional(pool)
    .await?;

    let Some((id, title, created_at)) = row else {
        return Err(DirectoryError::NotFound(canvas_id));
    };
    Ok(Canvas { id, title, created_at })
}

/// Delete a canvas by id. Its operations go with it via the schema cascade.
///
/// # Errors
///
/// Returns `NotFound` if the id does not resolve, or a database error if
/// the delete fails.
pub async fn delete_canvas(pool: &PgPool, canvas_id: Uuid) -> Result<(), DirectoryError> {
    let result = sqlx::query("DELETE FROM canvases WHERE id = $1")
        .bind(canvas_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DirectoryError::NotFound(canvas_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
