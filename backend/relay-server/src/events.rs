//! Server-Sent Events stream of relayed messages

use crate::AppState;

use relay_bus::{ShutdownGuard, Subscription};

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::State,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

/// GET /events
///
/// Opens with an `init` event carrying the visible history as a JSON array,
/// then one `message` event per admitted message. Ends when the peer goes
/// away, the subscriber is evicted, or the server shuts down.
/// `keep_alive_secs = 0` sends no keep-alive comments.
pub async fn event_stream(State(state): State<AppState>) -> Response {
    let (backfill, subscription) = state.bus.subscribe();
    info!(
        "Event stream {} opened with {} backfilled messages",
        subscription.id(),
        backfill.len()
    );

    let init = stream::iter(encode("init", &backfill));
    let live = stream::unfold(
        (subscription, state.shutdown.subscribe_guard()),
        next_event,
    );

    let sse = Sse::new(init.chain(live));
    match state.events.keep_alive_secs {
        0 => sse.into_response(),
        secs => sse
            .keep_alive(KeepAlive::new().interval(Duration::from_secs(secs)))
            .into_response(),
    }
}

/// Wait for the next admitted message or shutdown, whichever comes first
async fn next_event(
    (mut subscription, mut shutdown_guard): (Subscription, ShutdownGuard),
) -> Option<(Result<Event, Infallible>, (Subscription, ShutdownGuard))> {
    loop {
        tokio::select! {
            message = subscription.recv() => {
                let Some(message) = message else {
                    info!("Event stream {} ended by the bus", subscription.id());
                    return None;
                };
                // Unencodable messages are skipped, the stream stays open
                if let Some(event) = encode("message", &*message) {
                    return Some((event, (subscription, shutdown_guard)));
                }
            }

            _ = shutdown_guard.wait() => {
                debug!("Closing event stream {} for shutdown", subscription.id());
                return None;
            }
        }
    }
}

fn encode<T>(name: &str, payload: &T) -> Option<Result<Event, Infallible>>
where
    T: serde::Serialize + ?Sized,
{
    match Event::default().event(name).json_data(payload) {
        Ok(event) => Some(Ok(event)),
        Err(e) => {
            warn!("Failed to encode {} event: {}", name, e);
            None
        }
    }
}
