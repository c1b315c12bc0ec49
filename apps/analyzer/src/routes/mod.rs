pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::documents::handlers::handle_analyze_document;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Role profiles
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/roles/:name", get(handlers::handle_get_role))
        // Upload + full report
        .route(
            "/api/v1/documents/analyze",
            post(handle_analyze_document).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Text analysis
        .route("/api/v1/analyze/keywords", post(handlers::handle_keywords))
        .route("/api/v1/analyze/search", post(handlers::handle_search))
        .route("/api/v1/analyze/role", post(handlers::handle_role_match))
        .route("/api/v1/analyze/compare", post(handlers::handle_compare))
        .with_state(state)
}
