pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// JSON escaping can inflate the body beyond the raw text size; leave room for it.
const BODY_LIMIT_OVERHEAD: usize = 2;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_resume_bytes
        .saturating_mul(BODY_LIMIT_OVERHEAD);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
