//! Realtime channel — per-canvas fan-out of committed operations.
//!
//! DESIGN
//! ======
//! Each canvas with at least one connected subscriber has a `CanvasChannel`
//! entry in `AppState`. Saving an operation broadcasts the committed record
//! to every subscriber of that canvas, the originator included — filtering
//! the echo is the client's job. Delivery is at-least-once from the
//! subscriber's perspective; a subscriber whose queue is full loses the
//! event with a warning and recovers on its next full replay.

use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use canvas::op::OperationRecord;

use crate::state::{AppState, CanvasChannel, realtime_queue_capacity};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("canvas not found: {0}")]
    UnknownCanvas(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// SUBSCRIBE / UNSUBSCRIBE
// =============================================================================

/// Verify a canvas exists before accepting a subscription for it.
///
/// # Errors
///
/// Returns `UnknownCanvas` if the id does not resolve, or a database error
/// if the lookup fails.
pub async fn ensure_canvas(state: &AppState, canvas_id: Uuid) -> Result<(), ChannelError> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM canvases WHERE id = $1)")
        .bind(canvas_id)
        .fetch_one(&state.pool)
        .await?;

    if !exists {
        return Err(ChannelError::UnknownCanvas(canvas_id));
    }
    Ok(())
}

/// Register a new subscriber for a canvas. Returns the client id and the
/// receiving end of its bounded event queue.
pub async fn subscribe(state: &AppState, canvas_id: Uuid) -> (Uuid, mpsc::Receiver<OperationRecord>) {
    let client_id = Uuid::new_v4();
    let (tx, rx) = mpsc::channel(realtime_queue_capacity());

    let mut channels = state.channels.write().await;
    let channel = channels.entry(canvas_id).or_insert_with(CanvasChannel::new);
    channel.clients.insert(client_id, tx);

    info!(%canvas_id, %client_id, subscribers = channel.clients.len(), "realtime: client subscribed");
    (client_id, rx)
}

/// Remove a subscriber. Evicts the canvas entry when the last one leaves.
pub async fn unsubscribe(state: &AppState, canvas_id: Uuid, client_id: Uuid) {
    let mut channels = state.channels.write().await;
    let Some(channel) = channels.get_mut(&canvas_id) else {
        return;
    };

    channel.clients.remove(&client_id);
    info!(%canvas_id, %client_id, remaining = channel.clients.len(), "realtime: client unsubscribed");

    if channel.clients.is_empty() {
        channels.remove(&canvas_id);
        info!(%canvas_id, "realtime: evicted channel");
    }
}

// =============================================================================
// BROADCAST
// =============================================================================

/// Deliver a committed record to every subscriber of its canvas, the
/// originator included. A full subscriber queue drops the event.
pub async fn broadcast(state: &AppState, record: &OperationRecord) {
    let channels = state.channels.read().await;
    let Some(channel) = channels.get(&record.canvas_id) else {
        return;
    };

    for (client_id, tx) in &channel.clients {
        if tx.try_send(record.clone()).is_err() {
            warn!(canvas_id = %record.canvas_id, %client_id, "realtime: subscriber queue full, event dropped");
        }
    }
}

#[cfg(test)]
#[path = "realtime_test.rs"]
mod tests;
