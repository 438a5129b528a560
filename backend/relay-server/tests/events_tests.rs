//! Integration tests for the Server-Sent Events stream
mod common;

use common::{create_test_app_state, create_test_app_state_with, get, send};

use relay_core::PublishRequest;
use relay_server::build_router;

use std::path::Path;
use std::time::Duration;

use axum::body::Body;
use axum::http::{StatusCode, header};
use http_body_util::BodyExt;

/// One parsed SSE event: name and JSON data
struct SseEvent {
    name: String,
    data: serde_json::Value,
}

/// Reads whole events off an SSE body, buffering partial frames
struct SseReader {
    body: Body,
    buffer: String,
}

impl SseReader {
    fn new(body: Body) -> Self {
        Self {
            body,
            buffer: String::new(),
        }
    }

    /// Next event, or None once the stream has ended
    async fn next_event(&mut self) -> Option<SseEvent> {
        loop {
            if let Some(event) = parse_event(&self.next_block().await?) {
                return Some(event);
            }
        }
    }

    /// Next raw block up to the blank line, comments included
    async fn next_block(&mut self) -> Option<String> {
        loop {
            if let Some(end) = self.buffer.find("\n\n") {
                return Some(self.buffer.drain(..end + 2).collect());
            }

            let frame = tokio::time::timeout(Duration::from_secs(3), self.body.frame())
                .await
                .expect("timed out waiting for SSE frame")?
                .expect("SSE body error");
            if let Ok(data) = frame.into_data() {
                self.buffer.push_str(std::str::from_utf8(&data).unwrap());
            }
        }
    }
}

/// Comment-only blocks (keep-alives) yield None
fn parse_event(raw: &str) -> Option<SseEvent> {
    let mut name = None;
    let mut data = String::new();
    for line in raw.lines() {
        if let Some(value) = line.strip_prefix("event:") {
            name = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("data:") {
            data.push_str(value.trim_start());
        }
    }

    Some(SseEvent {
        name: name?,
        data: serde_json::from_str(&data).expect("SSE data is not JSON"),
    })
}

#[tokio::test]
async fn given_empty_bus_when_connecting_then_event_stream_opens_with_empty_init() {
    let app = build_router(create_test_app_state());

    let response = send(app, get("/events")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let mut reader = SseReader::new(response.into_body());
    let init = reader.next_event().await.unwrap();
    assert_eq!(init.name, "init");
    assert_eq!(init.data, serde_json::json!([]));
}

#[tokio::test]
async fn given_history_when_connecting_then_init_carries_visible_history_in_order() {
    // Given
    let state = create_test_app_state();
    for content in ["first", "Tick tock", "second"] {
        state.bus.submit(PublishRequest::text(content)).unwrap();
    }

    // When
    let response = send(build_router(state), get("/events")).await;

    // Then
    let mut reader = SseReader::new(response.into_body());
    let init = reader.next_event().await.unwrap();
    let contents: Vec<&str> = init
        .data
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["first", "second"]);
}

#[tokio::test]
async fn given_open_stream_when_messages_published_then_message_events_in_order() {
    // Given
    let state = create_test_app_state();
    let response = send(build_router(state.clone()), get("/events")).await;
    let mut reader = SseReader::new(response.into_body());
    assert_eq!(reader.next_event().await.unwrap().name, "init");

    // When
    for content in ["one", "ticket office", "two"] {
        state
            .bus
            .submit(PublishRequest::text(content).with_device("esp32", "Watch"))
            .unwrap();
    }

    // Then
    let first = reader.next_event().await.unwrap();
    assert_eq!(first.name, "message");
    assert_eq!(first.data["content"], "one");
    assert_eq!(first.data["deviceId"], "esp32");
    assert_eq!(first.data["deviceName"], "Watch");

    let second = reader.next_event().await.unwrap();
    assert_eq!(second.data["content"], "two");
}

#[tokio::test]
async fn given_open_stream_when_server_shuts_down_then_stream_ends_and_unsubscribes() {
    // Given
    let state = create_test_app_state();
    let response = send(build_router(state.clone()), get("/events")).await;
    let mut reader = SseReader::new(response.into_body());
    reader.next_event().await.unwrap();
    assert_eq!(state.bus.subscriber_count(), 1);

    // When
    state.shutdown.shutdown();

    // Then
    assert!(reader.next_event().await.is_none());
    assert_eq!(state.bus.subscriber_count(), 0);
}

#[tokio::test]
async fn given_open_stream_when_client_disconnects_then_unsubscribed() {
    // Given
    let state = create_test_app_state();
    let response = send(build_router(state.clone()), get("/events")).await;
    assert_eq!(state.bus.subscriber_count(), 1);

    // When
    drop(response);

    // Then
    assert_eq!(state.bus.subscriber_count(), 0);
    let outcome = state.bus.submit(PublishRequest::text("nobody home")).unwrap();
    assert_eq!(outcome.delivered, 0);
}

#[tokio::test]
async fn given_keep_alive_enabled_when_connecting_then_init_then_comment_heartbeat() {
    // Given
    let state = create_test_app_state_with(Path::new("does-not-exist"), 1);
    state.bus.submit(PublishRequest::text("earlier")).unwrap();

    // When
    let response = send(build_router(state), get("/events")).await;

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    let mut reader = SseReader::new(response.into_body());
    let init = reader.next_event().await.unwrap();
    assert_eq!(init.name, "init");
    assert_eq!(init.data[0]["content"], "earlier");

    let heartbeat = reader.next_block().await.unwrap();
    assert!(heartbeat.starts_with(':'), "expected comment, got {heartbeat:?}");
}

#[tokio::test]
async fn given_keep_alive_enabled_when_message_published_then_message_event_delivered() {
    // Given
    let state = create_test_app_state_with(Path::new("does-not-exist"), 15);
    let response = send(build_router(state.clone()), get("/events")).await;
    let mut reader = SseReader::new(response.into_body());
    assert_eq!(reader.next_event().await.unwrap().name, "init");

    // When
    state.bus.submit(PublishRequest::text("live")).unwrap();

    // Then
    let event = reader.next_event().await.unwrap();
    assert_eq!(event.name, "message");
    assert_eq!(event.data["content"], "live");
}
