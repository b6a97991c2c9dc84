use std::{sync::Arc, time::Duration};

use fifo_queue::{QueueMessage, QueueService, ReceiveRequest};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

/// `MessageProcessor` runs one polling worker against the queue
///
/// The shutdown token is only checked between poll cycles, so a receive or a
/// batch that is already in flight always runs to completion.
pub struct MessageProcessor {
    worker_id: usize,
    queue: Arc<dyn QueueService>,
    receive_request: ReceiveRequest,
    processing_delay: Duration,
}

impl MessageProcessor {
    /// Creates a new `MessageProcessor`
    #[must_use]
    pub fn new(
        worker_id: usize,
        queue: Arc<dyn QueueService>,
        receive_request: ReceiveRequest,
        processing_delay: Duration,
    ) -> Self {
        Self {
            worker_id,
            queue,
            receive_request,
            processing_delay,
        }
    }

    /// Runs the polling loop until the shutdown token is cancelled
    pub async fn run(&self, shutdown_token: CancellationToken) {
        info!("Consumer #{} started", self.worker_id);

        while !shutdown_token.is_cancelled() {
            self.poll_once().await;
        }

        info!("Consumer #{} stopped", self.worker_id);
    }

    /// Runs a single receive and processes the whole batch
    async fn poll_once(&self) {
        let messages = match self.queue.receive_messages(self.receive_request).await {
            Ok(messages) => messages,
            Err(e) => {
                // No backoff: the next receive is issued straight away
                error!(
                    upstream = e.is_upstream_error(),
                    "Consumer #{} error receiving messages: {}", self.worker_id, e
                );
                tokio::task::yield_now().await;
                return;
            }
        };

        debug!(
            "Consumer #{} received batch of {} messages",
            self.worker_id,
            messages.len()
        );

        for message in messages {
            self.process_and_delete(message).await;
        }
    }

    #[instrument(skip(self, message), fields(worker_id = self.worker_id, message_id = %message.message_id))]
    async fn process_and_delete(&self, message: QueueMessage) {
        info!(
            "Consumer #{} received message: {} (MessageGroupId: {}, MessageDeduplicationId: {})",
            self.worker_id,
            message.body,
            message.message_group_id(),
            message.message_deduplication_id()
        );

        tokio::time::sleep(self.processing_delay).await;

        // A failed delete leaves the message to reappear after its visibility timeout
        if let Err(e) = self.queue.delete_message(&message.receipt_handle).await {
            error!(
                upstream = e.is_upstream_error(),
                "Consumer #{} error deleting message: {}", self.worker_id, e
            );
        }
    }
}
