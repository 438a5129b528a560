use metrics::{counter, gauge};

/// Metrics collector for bus operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "relay_bus" }
    }

    /// Record admitted message and how many subscribers it reached
    pub fn message_published(&self, delivered: usize) {
        counter!(format!("{}.messages.published", self.prefix)).increment(1);
        counter!(format!("{}.messages.delivered", self.prefix)).increment(delivered as u64);
    }

    /// Record message dropped by the admission filter
    pub fn message_filtered(&self) {
        counter!(format!("{}.messages.filtered", self.prefix)).increment(1);
    }

    /// Record submit rejected before construction
    pub fn message_rejected(&self) {
        counter!(format!("{}.messages.rejected", self.prefix)).increment(1);
    }

    pub fn subscribers_changed(&self, active: usize) {
        gauge!(format!("{}.subscribers.active", self.prefix)).set(active as f64);
    }

    /// Record subscribers removed during fan-out
    pub fn subscribers_evicted(&self, reason: &str, count: usize) {
        if count == 0 {
            return;
        }
        counter!(format!("{}.subscribers.evicted", self.prefix)).increment(count as u64);
        counter!(format!("{}.subscribers.evicted.{}", self.prefix, reason)).increment(count as u64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
