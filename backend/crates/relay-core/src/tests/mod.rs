
use crate::Message;

use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

pub(crate) fn message(content: &str) -> Message {
    Message::new(content.to_string(), None, None, None, fixed_instant()).unwrap()
}
