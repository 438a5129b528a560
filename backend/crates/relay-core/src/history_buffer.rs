use crate::{CoreError, Message, Result};

use std::collections::VecDeque;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;

/// Bounded FIFO of accepted messages, oldest first.
///
/// Holds no filtering logic: callers append only admitted messages.
#[derive(Debug)]
pub struct HistoryBuffer {
    entries: VecDeque<Arc<Message>>,
    capacity: usize,
}

impl HistoryBuffer {
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CoreError::InvalidCapacity {
                capacity,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append as newest entry, evicting the oldest when full.
    /// Returns the evicted message, if any.
    pub fn append(&mut self, message: Arc<Message>) -> Option<Arc<Message>> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(message);
        evicted
    }

    /// Copy of the current entries, oldest first
    pub fn snapshot(&self) -> Vec<Arc<Message>> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
