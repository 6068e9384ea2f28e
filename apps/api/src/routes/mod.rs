pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS validation API
        .route("/api/v1/ats/validate", post(handlers::handle_validate))
        .route(
            "/api/v1/ats/validate/batch",
            post(handlers::handle_validate_batch),
        )
        .route(
            "/api/v1/ats/best-practices",
            get(handlers::handle_best_practices),
        )
        .route(
            "/api/v1/ats/common-issues",
            get(handlers::handle_common_issues),
        )
        .route("/api/v1/ats/catalog", get(handlers::handle_catalog))
        .fallback(not_found)
        .with_state(state)
}
