#![allow(dead_code)]

//! Test infrastructure for relay-server router tests

use relay_bus::{BroadcastBus, BusConfig, ShutdownCoordinator};
use relay_config::{EventsConfig, StaticConfig};
use relay_server::AppState;

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// AppState with default history, no keep-alive and the given asset root
pub fn create_test_app_state_with_root(static_dir: &Path) -> AppState {
    create_test_app_state_with(static_dir, 0)
}

/// AppState with the given asset root and keep-alive interval
pub fn create_test_app_state_with(static_dir: &Path, keep_alive_secs: u64) -> AppState {
    AppState {
        bus: BroadcastBus::new(BusConfig::default()).expect("Failed to create bus"),
        shutdown: ShutdownCoordinator::new(),
        events: EventsConfig {
            buffer_size: 64,
            keep_alive_secs,
        },
        static_files: StaticConfig {
            dir: static_dir.display().to_string(),
            index: "index.html".to_string(),
        },
    }
}

/// AppState whose asset root does not exist
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with_root(Path::new("does-not-exist"))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("Router failed")
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("Body is not JSON")
}
