use crate::{
    AppState, MAX_BODY_BYTES, api_not_found, api_preflight, events, health, list_messages, publish_message,
    serve_asset,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{any, get},
};
use http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Message API
        .route(
            "/api/messages",
            get(list_messages)
                .post(publish_message)
                .options(api_preflight),
        )
        // Event stream
        .route("/events", get(events::event_stream))
        // Health check endpoints
        .route(
            "/api/health",
            get(health::health_check).options(api_preflight),
        )
        .route(
            "/api/live",
            get(health::liveness_check).options(api_preflight),
        )
        // Unknown API routes answer in the API error shape
        .route("/api", any(api_not_found).options(api_preflight))
        .route("/api/{*path}", any(api_not_found).options(api_preflight))
        // Everything else is a static asset
        .fallback(serve_asset)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
