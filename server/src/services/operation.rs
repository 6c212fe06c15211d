//! Operation store — the append-only log of strokes and erasures.
//!
//! DESIGN
//! ======
//! Operations are immutable rows: single-row inserts, no update or delete
//! path, gone only when their canvas cascades away. `created_at` is assigned
//! at commit and is the total order replay uses; ties break on id so the
//! order is stable. Point-count validation is the caller's responsibility —
//! the store persists whatever payload it is handed.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use canvas::op::{OpKind, OperationRecord, PathData};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("canvas not found: {0}")]
    CanvasMissing(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// SAVE / LOAD
// =============================================================================

/// Append one operation to a canvas's log and return the committed record.
///
/// # Errors
///
/// Returns `CanvasMissing` when the canvas id no longer resolves (the
/// insert hits the foreign key), or a database error for any other failure.
/// There is no automatic retry.
pub async fn save_operation(
    pool: &PgPool,
    canvas_id: Uuid,
    kind: OpKind,
    path_data: PathData,
) -> Result<OperationRecord, PersistenceError> {
    let id = Uuid::new_v4();
    let created_at: i64 = sqlx::query_scalar(
        "INSERT INTO drawing_operations (id, canvas_id, operation_type, path_data)
         VALUES ($1, $2, $3, $4)
         RETURNING (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT",
    )
    .bind(id)
    .bind(canvas_id)
    .bind(kind.as_str())
    .bind(Json(&path_data))
    .fetch_one(pool)
    .await
    .map_err(|e| map_insert_error(canvas_id, e))?;

    Ok(OperationRecord { id, canvas_id, operation_type: kind, path_data, created_at })
}

/// Load a canvas's full operation log in replay order: ascending commit
/// time, ties broken by id.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn load_operations(pool: &PgPool, canvas_id: Uuid) -> Result<Vec<OperationRecord>, PersistenceError> {
    let rows = sqlx::query_as::<_, (Uuid, Uuid, String, Json<PathData>, i64)>(
        "SELECT id, canvas_id, operation_type, path_data,
                (EXTRACT(EPOCH FROM created_at) * 1000)::BIGINT
         FROM drawing_operations
         WHERE canvas_id = $1
         ORDER BY created_at ASC, id ASC",
    )
    .bind(canvas_id)
    .fetch_all(pool)
    .await?;

    let mut records = Vec::with_capacity(rows.len());
    for (id, canvas_id, operation_type, Json(path_data), created_at) in rows {
        let operation_type = parse_kind(&operation_type)?;
        records.push(OperationRecord { id, canvas_id, operation_type, path_data, created_at });
    }
    Ok(records)
}

// =============================================================================
// HELPERS
// =============================================================================

fn map_insert_error(canvas_id: Uuid, err: sqlx::Error) -> PersistenceError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            PersistenceError::CanvasMissing(canvas_id)
        }
        _ => PersistenceError::Database(err),
    }
}

/// The schema constrains `operation_type` to the known kinds, so a parse
/// failure here means a corrupted row.
fn parse_kind(raw: &str) -> Result<OpKind, PersistenceError> {
    OpKind::parse(raw).ok_or_else(|| {
        PersistenceError::Database(sqlx::Error::ColumnDecode {
            index: "operation_type".into(),
            source: format!("unknown operation type: {raw}").into(),
        })
    })
}

#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;
