//! GET /health - liveness check, no envelope.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use parley_core::bot::Bot;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "bot": state.chat_service.bot().name(),
        "model": state.config.provider.model,
    }))
}
