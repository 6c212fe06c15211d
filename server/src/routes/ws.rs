//! WebSocket handler — the push-only realtime channel.
//!
//! DESIGN
//! ======
//! On upgrade the client is registered as a subscriber for its canvas, then
//! the connection enters a `select!` loop:
//! - Committed records from the canvas channel → forwarded as JSON text
//! - Inbound text frames are ignored (push-only); `Close` ends the loop
//!
//! LIFECYCLE
//! =========
//! 1. `GET /api/ws?canvas=<id>` → canvas validated, socket upgraded
//! 2. Subscribe → forward records until the socket or the channel closes
//! 3. Teardown always unsubscribes, so a dropped socket never leaks its
//!    registration
//!
//! The canvas is validated before the upgrade so an unknown id is a plain
//! HTTP 404 rather than an immediately-closed socket.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use canvas::op::OperationRecord;

use crate::services::realtime::{self, ChannelError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct WsParams {
    pub canvas: Uuid,
}

// =============================================================================
// UPGRADE
// =============================================================================

/// `GET /api/ws?canvas=<id>` — upgrade to the realtime channel for a canvas.
pub async fn handle_ws(
    State(state): State<AppState>,
    Query(params): Query<WsParams>,
    ws: WebSocketUpgrade,
) -> Response {
    match realtime::ensure_canvas(&state, params.canvas).await {
        Ok(()) => {}
        Err(ChannelError::UnknownCanvas(id)) => {
            warn!(canvas_id = %id, "ws: unknown canvas");
            return (StatusCode::NOT_FOUND, "unknown canvas").into_response();
        }
        Err(ChannelError::Database(e)) => {
            tracing::error!(error = %e, "ws: canvas lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "canvas lookup error").into_response();
        }
    }

    ws.on_upgrade(move |socket| run_ws(socket, state, params.canvas))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState, canvas_id: Uuid) {
    let (client_id, mut events) = realtime::subscribe(&state, canvas_id).await;
    info!(%canvas_id, %client_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Close(_) => break,
                    // Push-only channel: inbound frames carry nothing.
                    _ => {}
                }
            }
            event = events.recv() => {
                // The senders disappear when the canvas is deleted.
                let Some(record) = event else { break };
                if send_record(&mut socket, &record).await.is_err() {
                    break;
                }
            }
        }
    }

    realtime::unsubscribe(&state, canvas_id, client_id).await;
    info!(%canvas_id, %client_id, "ws: client disconnected");
}

async fn send_record(socket: &mut WebSocket, record: &OperationRecord) -> Result<(), ()> {
    let json = match serde_json::to_string(record) {
        Ok(j) => j,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize record");
            return Err(());
        }
    };
    info!(operation_id = %record.id, canvas_id = %record.canvas_id, "ws: push record");
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
