use crate::{BLOCKED_TERM, Message};

/// Decides whether content may be stored, broadcast, or listed.
///
/// The same predicate guards both the publish path and history reads.
/// Matching is a case-insensitive substring test, not a whole-word match:
/// "Ticket" and "attick" are rejected too.
pub struct AdmissionFilter;

impl AdmissionFilter {
    pub fn admit(content: &str) -> bool {
        !content.to_lowercase().contains(BLOCKED_TERM)
    }

    pub fn admits(message: &Message) -> bool {
        Self::admit(&message.content)
    }
}
