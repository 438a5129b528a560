use crate::SubscriberId;

use relay_core::Message;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Set of live subscriber queues, keyed by identity.
///
/// Not synchronized on its own: the bus owns it behind its lock.
#[derive(Default)]
pub struct SubscriberRegistry {
    subscribers: HashMap<SubscriberId, mpsc::Sender<Arc<Message>>>,
}

/// Per-publish delivery report
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FanOut {
    pub delivered: usize,
    /// Receiver already dropped (peer went away)
    pub closed: Vec<SubscriberId>,
    /// Queue full (subscriber too slow), evicted
    pub lagging: Vec<SubscriberId>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SubscriberId, sender: mpsc::Sender<Arc<Message>>) {
        self.subscribers.insert(id, sender);
    }

    /// Returns false when the id was not registered
    pub fn remove(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn contains(&self, id: SubscriberId) -> bool {
        self.subscribers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Queue `message` for every subscriber without waiting on any of them.
    ///
    /// Subscribers whose queue is closed or full are removed; dropping the
    /// sender ends their stream once the queued messages are drained.
    pub fn fan_out(&mut self, message: &Arc<Message>) -> FanOut {
        let mut report = FanOut::default();

        for (id, sender) in &self.subscribers {
            match sender.try_send(Arc::clone(message)) {
                Ok(()) => report.delivered += 1,
                Err(TrySendError::Closed(_)) => {
                    debug!("Subscriber {id} disconnected, removing");
                    report.closed.push(*id);
                }
                Err(TrySendError::Full(_)) => {
                    warn!("Subscriber {id} queue full, evicting slow consumer");
                    report.lagging.push(*id);
                }
            }
        }

        for id in report.closed.iter().chain(report.lagging.iter()) {
            self.subscribers.remove(id);
        }

        report
    }
}
