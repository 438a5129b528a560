use crate::AppState;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::json;

/// GET /api/health - Relay status with bus counters
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "subscribers": state.bus.subscriber_count(),
        "history": {
            "length": state.bus.history_len(),
            "capacity": state.bus.capacity(),
        },
        "shuttingDown": state.shutdown.is_shutdown(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /api/live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
