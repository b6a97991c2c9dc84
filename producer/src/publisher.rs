use std::{sync::Arc, time::Duration};

use fifo_queue::QueueService;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::message_factory::{IdPolicy, MessageFactory};

/// Configuration for a publishing run
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Number of messages to send
    pub message_count: usize,
    /// How group and deduplication IDs are chosen
    pub id_policy: IdPolicy,
    /// Fixed pause after every send attempt
    pub send_interval: Duration,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            message_count: 10,
            id_policy: IdPolicy::Fixed,
            send_interval: Duration::from_secs(1),
        }
    }
}

/// Sends a fixed number of synthesized messages, one at a time
pub struct Publisher {
    queue: Arc<dyn QueueService>,
    config: PublisherConfig,
    factory: MessageFactory,
    shutdown_token: CancellationToken,
}

impl Publisher {
    /// Creates a new `Publisher`
    #[must_use]
    pub fn new(queue: Arc<dyn QueueService>, config: PublisherConfig) -> Self {
        let factory = MessageFactory::new(config.id_policy);
        Self::with_factory(queue, config, factory)
    }

    /// Creates a `Publisher` that builds messages with the given factory
    #[must_use]
    pub fn with_factory(
        queue: Arc<dyn QueueService>,
        config: PublisherConfig,
        factory: MessageFactory,
    ) -> Self {
        Self {
            queue,
            config,
            factory,
            shutdown_token: CancellationToken::new(),
        }
    }

    /// Returns a clone of the shutdown token for external control
    #[must_use]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Sends every message, pacing sends by the configured interval
    ///
    /// Send failures are logged and skipped. Cancelling the shutdown token
    /// stops the run before the next send.
    pub async fn run(mut self) {
        info!(
            "Publishing {} messages with {:?} IDs every {:?}",
            self.config.message_count,
            self.factory.policy(),
            self.config.send_interval
        );

        for index in 1..=self.config.message_count {
            if self.shutdown_token.is_cancelled() {
                info!(
                    "Publisher stopped after {} of {} messages",
                    index - 1,
                    self.config.message_count
                );
                return;
            }

            self.send_one(index).await;

            // Rate limit by fixed delay, whether or not the send succeeded
            tokio::select! {
                () = tokio::time::sleep(self.config.send_interval) => {}
                () = self.shutdown_token.cancelled() => {}
            }
        }

        info!("Publisher finished");
    }

    async fn send_one(&mut self, index: usize) {
        let message = self.factory.build(index);

        match self.queue.send_message(&message).await {
            Ok(message_id) => info!(
                message_id = %message_id,
                "Sent message {} (MessageGroupId: {}, MessageDeduplicationId: {})",
                message.body,
                message.message_group_id,
                message.message_deduplication_id
            ),
            Err(e) => error!(
                upstream = e.is_upstream_error(),
                "Error sending message {}: {}", index, e
            ),
        }
    }
}
