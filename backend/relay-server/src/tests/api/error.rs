use crate::ApiError;

use relay_bus::BusError;
use relay_core::{CoreError, PublishRequest};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "No API route for /api/nope".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No API route for /api/nope");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let error = ApiError::Validation {
        message: "content is required".into(),
        field: Some("content".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "content");
}

#[tokio::test]
async fn given_payload_too_large_when_rendered_then_413() {
    let error = ApiError::PayloadTooLarge {
        message: "request body too large".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500() {
    let error = ApiError::Internal {
        message: "bus unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn given_missing_content_when_converted_then_validation_error() {
    let core_error = PublishRequest::default()
        .into_message(chrono::Utc::now())
        .unwrap_err();

    let api_error = ApiError::from(core_error);

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "content is required");
            assert_eq!(field.as_deref(), Some("content"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn given_malformed_json_when_converted_then_bad_request_invalid_json() {
    let core_error = PublishRequest::from_json(b"{not json").unwrap_err();

    let api_error = ApiError::from(core_error);

    match api_error {
        ApiError::BadRequest { message, .. } => assert_eq!(message, "invalid json"),
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

#[test]
fn given_bus_config_error_when_converted_then_internal() {
    let bus_error = BusError::from(CoreError::InvalidCapacity {
        capacity: 0,
        location: ErrorLocation::from(Location::caller()),
    });

    let api_error = ApiError::from(bus_error);

    assert!(matches!(api_error, ApiError::Internal { .. }));
}
