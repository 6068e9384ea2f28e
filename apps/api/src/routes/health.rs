use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service and rule catalog versions.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.validator.catalog();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ats-api",
        "catalogVersion": catalog.version(),
        "rules": catalog.entries().len()
    }))
}
