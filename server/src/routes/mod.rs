//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the HTTP + websocket endpoints under a single Axum router: the
//! canvas directory CRUD, the per-canvas operation log, the realtime
//! websocket, and the share-link redirect.

pub mod canvases;
pub mod ws;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The complete application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/canvas", get(canvases::list_canvases).post(canvases::create_canvas))
        .route(
            "/api/canvas/{id}",
            get(canvases::get_canvas).delete(canvases::delete_canvas),
        )
        .route(
            "/api/canvas/{id}/operations",
            get(canvases::list_operations).post(canvases::create_operation),
        )
        .route("/api/ws", get(ws::handle_ws))
        .route("/canvas/{id}", get(redirect_share_link))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Share links open the app with the canvas preselected.
async fn redirect_share_link(Path(id): Path<String>) -> Redirect {
    Redirect::temporary(&format!("/?canvas={id}"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
