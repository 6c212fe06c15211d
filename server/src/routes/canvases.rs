//! Canvas directory and operation log routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use canvas::consts::MIN_STROKE_POINTS;
use canvas::op::{OpKind, OperationRecord, PathData};

use crate::services::directory::{self, Canvas, DirectoryError};
use crate::services::operation::{self, PersistenceError};
use crate::services::realtime;
use crate::state::AppState;

// =============================================================================
// DIRECTORY
// =============================================================================

#[derive(Deserialize)]
pub struct CreateCanvasBody {
    pub title: String,
}

/// `GET /api/canvas` — list all canvases, newest first.
pub async fn list_canvases(State(state): State<AppState>) -> Result<Json<Vec<Canvas>>, StatusCode> {
    let rows = directory::list_canvases(&state.pool)
        .await
        .map_err(directory_error_to_status)?;
    Ok(Json(rows))
}

/// `POST /api/canvas` — create a canvas.
pub async fn create_canvas(
    State(state): State<AppState>,
    Json(body): Json<CreateCanvasBody>,
) -> Result<(StatusCode, Json<Canvas>), StatusCode> {
    let row = directory::create_canvas(&state.pool, &body.title)
        .await
        .map_err(directory_error_to_status)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/canvas/:id` — fetch one canvas. Backs the shared view's title
/// lookup; an unknown id is the shared view's not-found state.
pub async fn get_canvas(
    State(state): State<AppState>,
    Path(canvas_id): Path<Uuid>,
) -> Result<Json<Canvas>, StatusCode> {
    let row = directory::get_canvas(&state.pool, canvas_id)
        .await
        .map_err(directory_error_to_status)?;
    Ok(Json(row))
}

/// `DELETE /api/canvas/:id` — delete a canvas and, via the schema cascade,
/// its operations. Dropping the realtime channel entry closes the senders,
/// so subscriber sockets observe the closure and shut down.
pub async fn delete_canvas(
    State(state): State<AppState>,
    Path(canvas_id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    directory::delete_canvas(&state.pool, canvas_id)
        .await
        .map_err(directory_error_to_status)?;

    {
        let mut channels = state.channels.write().await;
        channels.remove(&canvas_id);
    }

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// OPERATION LOG
// =============================================================================

#[derive(Deserialize)]
pub struct CreateOperationBody {
    pub operation_type: OpKind,
    pub path_data: PathData,
}

/// `GET /api/canvas/:id/operations` — the full operation log in replay
/// order.
pub async fn list_operations(
    State(state): State<AppState>,
    Path(canvas_id): Path<Uuid>,
) -> Result<Json<Vec<OperationRecord>>, StatusCode> {
    directory::get_canvas(&state.pool, canvas_id)
        .await
        .map_err(directory_error_to_status)?;

    let records = operation::load_operations(&state.pool, canvas_id)
        .await
        .map_err(persistence_error_to_status)?;
    Ok(Json(records))
}

/// `POST /api/canvas/:id/operations` — append one operation and broadcast
/// the committed record to the canvas's realtime channel.
pub async fn create_operation(
    State(state): State<AppState>,
    Path(canvas_id): Path<Uuid>,
    Json(body): Json<CreateOperationBody>,
) -> Result<(StatusCode, Json<OperationRecord>), StatusCode> {
    // A path below the point minimum has no visual effect and must never
    // reach the log.
    if body.path_data.points.len() < MIN_STROKE_POINTS {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let record = operation::save_operation(&state.pool, canvas_id, body.operation_type, body.path_data)
        .await
        .map_err(persistence_error_to_status)?;

    realtime::broadcast(&state, &record).await;

    Ok((StatusCode::CREATED, Json(record)))
}

// =============================================================================
// STATUS MAPPING
// =============================================================================

pub(crate) fn directory_error_to_status(err: DirectoryError) -> StatusCode {
    match err {
        DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
        DirectoryError::EmptyTitle => StatusCode::BAD_REQUEST,
        DirectoryError::Database(e) => {
            tracing::error!(error = %e, "canvas directory query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn persistence_error_to_status(err: PersistenceError) -> StatusCode {
    match err {
        PersistenceError::CanvasMissing(_) => StatusCode::NOT_FOUND,
        PersistenceError::Database(e) => {
            tracing::error!(error = %e, "operation log query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "canvases_test.rs"]
mod tests;
