use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health check simple, no consulta el store
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
