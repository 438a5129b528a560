//! Message REST API handlers

use crate::{ApiError, ApiResult, AppState, MessageListResponse, PublishResponse};

use relay_core::PublishRequest;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::BytesRejection},
};
use bytes::Bytes;
use error_location::ErrorLocation;
use http::{StatusCode, Uri, header};
use log::debug;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/messages
///
/// List the visible history, oldest first
pub async fn list_messages(State(state): State<AppState>) -> Json<MessageListResponse> {
    Json(MessageListResponse {
        messages: state.bus.list_visible(),
    })
}

/// POST /api/messages
///
/// Publish a message. The body is read raw so that malformed JSON and
/// oversized bodies map onto the API error shape.
pub async fn publish_message(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<PublishResponse>)> {
    let body = body?;
    let request = PublishRequest::from_json(&body)?;
    let outcome = state.bus.submit(request)?;

    if !outcome.admitted {
        debug!("Message {} accepted but not relayed", outcome.message.id);
    }

    Ok((
        StatusCode::CREATED,
        Json(PublishResponse {
            ok: true,
            message: outcome.message,
        }),
    ))
}

/// Any unmatched `/api/*` route
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No API route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// OPTIONS on any `/api/*` route without a CORS preflight header
pub async fn api_preflight() -> (StatusCode, [(header::HeaderName, &'static str); 2]) {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}
