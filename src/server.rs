//! Router assembly shared by the binary and the integration tests.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Builds the full application router.
///
/// Every route is a plain GET; the only middleware is HTTP tracing.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/favicon.ico", get(handlers::favicon))
        .route("/health", get(handlers::health))
        .route("/search", get(handlers::search_movie))
        .route("/movie/:movie_id", get(handlers::get_movie))
        .route("/actor/:actor_id", get(handlers::get_actor))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
