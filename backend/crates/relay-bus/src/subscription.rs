use crate::{BroadcastBus, BusError, Result as BusErrorResult, SubscriberId};

use relay_core::Message;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Live handle for one subscriber.
///
/// Yields every message admitted after registration, in publish order.
/// Dropping the handle unsubscribes it.
pub struct Subscription {
    id: SubscriberId,
    receiver: mpsc::Receiver<Arc<Message>>,
    bus: BroadcastBus,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriberId,
        receiver: mpsc::Receiver<Arc<Message>>,
        bus: BroadcastBus,
    ) -> Self {
        Self { id, receiver, bus }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Next message, or None once unsubscribed or evicted and drained
    pub async fn recv(&mut self) -> Option<Arc<Message>> {
        self.receiver.recv().await
    }

    /// Non-blocking receive. `Ok(None)` means nothing is queued yet.
    #[track_caller]
    pub fn try_recv(&mut self) -> BusErrorResult<Option<Arc<Message>>> {
        match self.receiver.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(BusError::SubscriptionClosed {
                subscriber_id: self.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Whether the bus still delivers to this handle
    pub fn is_registered(&self) -> bool {
        self.bus.is_subscribed(self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.id);
    }
}
