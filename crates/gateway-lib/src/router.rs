// ============================
// crates/gateway-lib/src/router.rs
// ============================
//! HTTP router assembly.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Create the gateway router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::notice).post(handlers::submit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
