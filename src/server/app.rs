//! Axum application builder

use super::routes;
use super::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Build the router with both endpoints on shared state
#[must_use]
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/submit", post(routes::submit))
        .with_state(state)
}
