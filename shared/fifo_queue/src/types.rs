use std::collections::HashMap;

use crate::error::{QueueError, QueueResult};

/// System attribute carrying the FIFO message group ID
pub const MESSAGE_GROUP_ID_ATTRIBUTE: &str = "MessageGroupId";

/// System attribute carrying the FIFO deduplication ID
pub const MESSAGE_DEDUPLICATION_ID_ATTRIBUTE: &str = "MessageDeduplicationId";

/// Maximum length SQS accepts for group and deduplication IDs
pub const MAX_FIFO_ID_LENGTH: usize = 128;

/// A message received from the queue, bound to one delivery attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueMessage {
    /// The message body
    pub body: String,
    /// Receipt handle for deleting this delivery of the message
    pub receipt_handle: String,
    /// Message ID
    pub message_id: String,
    /// System attributes returned with the message, keyed by attribute name
    pub attributes: HashMap<String, String>,
}

impl QueueMessage {
    /// Returns the FIFO message group ID, or an empty string when absent
    #[must_use]
    pub fn message_group_id(&self) -> &str {
        self.attribute(MESSAGE_GROUP_ID_ATTRIBUTE)
    }

    /// Returns the FIFO deduplication ID, or an empty string when absent
    #[must_use]
    pub fn message_deduplication_id(&self) -> &str {
        self.attribute(MESSAGE_DEDUPLICATION_ID_ATTRIBUTE)
    }

    fn attribute(&self, name: &str) -> &str {
        self.attributes.get(name).map_or("", String::as_str)
    }
}

/// A message to publish to a FIFO queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// The message body
    pub body: String,
    /// Group ID that orders messages within the FIFO queue
    pub message_group_id: String,
    /// ID that suppresses duplicates within the deduplication window
    pub message_deduplication_id: String,
}

impl OutgoingMessage {
    /// Checks the FIFO identifiers against the limits SQS enforces
    ///
    /// # Errors
    ///
    /// Returns `QueueError::MissingMessageGroupId` if the group ID is empty and
    /// `QueueError::InvalidMessage` if either identifier is too long
    pub fn validate(&self) -> QueueResult<()> {
        if self.message_group_id.is_empty() {
            return Err(QueueError::MissingMessageGroupId);
        }
        if self.message_group_id.len() > MAX_FIFO_ID_LENGTH {
            return Err(QueueError::InvalidMessage(format!(
                "message group ID exceeds {MAX_FIFO_ID_LENGTH} characters"
            )));
        }
        if self.message_deduplication_id.len() > MAX_FIFO_ID_LENGTH {
            return Err(QueueError::InvalidMessage(format!(
                "message deduplication ID exceeds {MAX_FIFO_ID_LENGTH} characters"
            )));
        }
        Ok(())
    }
}

/// Parameters for a single long-poll receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiveRequest {
    /// Maximum number of messages to retrieve (1-10)
    pub max_messages: i32,
    /// Wait time for long polling (in seconds)
    pub wait_time_seconds: i32,
}

/// Configuration for queue operations
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Queue URL
    pub queue_url: String,
}

impl QueueConfig {
    /// Creates a queue configuration for the given URL
    #[must_use]
    pub fn new(queue_url: impl Into<String>) -> Self {
        Self {
            queue_url: queue_url.into(),
        }
    }
}
