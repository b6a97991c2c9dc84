use async_trait::async_trait;

use crate::error::QueueResult;
use crate::types::{OutgoingMessage, QueueMessage, ReceiveRequest};

/// Operations the tools need from a FIFO queue
///
/// Implementations are shared between tasks behind an `Arc`, so every method
/// takes `&self` and must be safe to call concurrently.
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Long-polls the queue for up to `request.max_messages` messages
    ///
    /// May block for up to `request.wait_time_seconds` and may return an empty
    /// batch. All system attributes are requested for every message.
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the receive operation fails
    async fn receive_messages(&self, request: ReceiveRequest) -> QueueResult<Vec<QueueMessage>>;

    /// Deletes one delivery of a message by its receipt handle
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the delete operation fails
    async fn delete_message(&self, receipt_handle: &str) -> QueueResult<()>;

    /// Sends a message and returns its ID, or an empty string if none was returned
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the message is invalid or the send operation fails
    async fn send_message(&self, message: &OutgoingMessage) -> QueueResult<String>;
}
