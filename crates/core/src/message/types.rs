use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Primary key of a stored message (`SERIAL` in PostgreSQL).
pub type MessageId = i32;

/// A single message on the board.
///
/// `id` and `timestamp` are assigned by storage; `content` never changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    /// Creation time as stored, without time zone.
    ///
    /// `None` only for rows written outside this service into a table whose
    /// column allows NULL; serialized as `null`.
    pub timestamp: Option<NaiveDateTime>,
}

impl Message {
    pub fn new(id: MessageId, content: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp: Some(timestamp),
        }
    }

    /// Creates a message with no stored timestamp.
    pub fn without_timestamp(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp: None,
        }
    }
}

/// Orders messages newest first, breaking timestamp ties by descending id.
///
/// Messages without a timestamp sort last, like `DESC NULLS LAST`.
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
}
