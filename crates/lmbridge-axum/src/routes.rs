//! Route definitions and router construction.

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::bootstrap::BridgeContext;
use crate::handlers;
use crate::state::AppState;

/// Create the router binding the three bridge operations.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(context: BridgeContext) -> Router {
    let state: AppState = Arc::new(context);
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/models", get(handlers::models::list))
        .route("/v1/models/{id}", get(handlers::models::get))
        .route("/v1/completions", post(handlers::completions::create))
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
