use crate::{
    BusConfig, BusError, Metrics, Result as BusErrorResult, SubmitOutcome, SubscriberId,
    SubscriberRegistry, Subscription,
};

use relay_core::{AdmissionFilter, HistoryBuffer, Message, PublishRequest};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// In-memory broadcast bus: bounded history plus live fan-out.
///
/// History and registry sit behind one lock. Publishing appends and queues
/// the message for every subscriber inside the same critical section, so
/// each subscriber observes exactly the history order. Queueing never waits.
pub struct BroadcastBus {
    inner: Arc<Mutex<BusInner>>,
    config: BusConfig,
    metrics: Metrics,
}

struct BusInner {
    history: HistoryBuffer,
    registry: SubscriberRegistry,
}

impl BroadcastBus {
    #[track_caller]
    pub fn new(config: BusConfig) -> BusErrorResult<Self> {
        if config.subscriber_buffer_size == 0 {
            return Err(BusError::InvalidConfig {
                message: "subscriber buffer size must be at least 1".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let history = HistoryBuffer::with_capacity(config.history_capacity)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(BusInner {
                history,
                registry: SubscriberRegistry::new(),
            })),
            config,
            metrics: Metrics::new(),
        })
    }

    /// Validate a raw payload, then admit and fan out the resulting message.
    ///
    /// A message rejected by the admission filter is still returned as a
    /// success with `admitted == false`; it is neither stored nor delivered.
    pub fn submit(&self, request: PublishRequest) -> BusErrorResult<SubmitOutcome> {
        let message = match request.into_message(Utc::now()) {
            Ok(message) => Arc::new(message),
            Err(e) => {
                self.metrics.message_rejected();
                return Err(e.into());
            }
        };

        Ok(self.publish(message))
    }

    /// Admit and fan out an already constructed message
    pub fn publish(&self, message: Arc<Message>) -> SubmitOutcome {
        if !AdmissionFilter::admits(&message) {
            debug!("Message {} dropped by admission filter", message.id);
            self.metrics.message_filtered();
            return SubmitOutcome {
                message,
                admitted: false,
                delivered: 0,
            };
        }

        let (report, active) = {
            let mut inner = self.inner.lock();
            inner.history.append(Arc::clone(&message));
            let report = inner.registry.fan_out(&message);
            (report, inner.registry.len())
        };

        self.metrics.message_published(report.delivered);
        if !report.closed.is_empty() || !report.lagging.is_empty() {
            self.metrics.subscribers_evicted("closed", report.closed.len());
            self.metrics.subscribers_evicted("lagging", report.lagging.len());
            self.metrics.subscribers_changed(active);
        }

        debug!(
            "Published message {} to {} subscribers",
            message.id, report.delivered
        );

        SubmitOutcome {
            message,
            admitted: true,
            delivered: report.delivered,
        }
    }

    /// Register a subscriber.
    ///
    /// Returns the visible history as backfill together with the live handle.
    /// Both are taken under the bus lock, so no message falls between them.
    pub fn subscribe(&self) -> (Vec<Arc<Message>>, Subscription) {
        let id = SubscriberId::new();
        let (sender, receiver) = mpsc::channel(self.config.subscriber_buffer_size);

        let (backfill, active) = {
            let mut inner = self.inner.lock();
            inner.registry.insert(id, sender);
            (inner.history.snapshot(), inner.registry.len())
        };

        info!("Registered subscriber {id} ({active} total)");
        self.metrics.subscribers_changed(active);

        (
            Self::visible(backfill),
            Subscription::new(id, receiver, self.clone()),
        )
    }

    /// Remove a subscriber. Unknown or already removed ids are a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let (removed, active) = {
            let mut inner = self.inner.lock();
            (inner.registry.remove(id), inner.registry.len())
        };

        if removed {
            info!("Unregistered subscriber {id} ({active} total remaining)");
            self.metrics.subscribers_changed(active);
        }

        removed
    }

    /// History re-filtered through the admission filter, oldest first
    pub fn list_visible(&self) -> Vec<Arc<Message>> {
        Self::visible(self.snapshot())
    }

    /// Raw history, oldest first
    pub fn snapshot(&self) -> Vec<Arc<Message>> {
        self.inner.lock().history.snapshot()
    }

    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.inner.lock().registry.contains(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().registry.len()
    }

    pub fn history_len(&self) -> usize {
        self.inner.lock().history.len()
    }

    pub fn capacity(&self) -> usize {
        self.config.history_capacity
    }

    fn visible(messages: Vec<Arc<Message>>) -> Vec<Arc<Message>> {
        messages
            .into_iter()
            .filter(|message| AdmissionFilter::admits(message))
            .collect()
    }
}

impl Clone for BroadcastBus {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
        }
    }
}
