//! SQS FIFO queue implementation
//!
//! This module implements [`QueueService`] on top of the AWS SDK SQS client.

use crate::{
    error::QueueResult,
    service::QueueService,
    types::{OutgoingMessage, QueueConfig, QueueMessage, ReceiveRequest},
};
use async_trait::async_trait;
use aws_sdk_sqs::{types::MessageSystemAttributeName, Client as SqsClient};
use std::sync::Arc;

/// SQS queue bound to a single queue URL
pub struct SqsQueue {
    sqs_client: Arc<SqsClient>,
    config: QueueConfig,
}

impl SqsQueue {
    /// Creates a new SQS queue
    ///
    /// # Arguments
    ///
    /// * `sqs_client` - Pre-configured SQS client
    /// * `config` - Queue configuration including URL
    #[must_use]
    pub const fn new(sqs_client: Arc<SqsClient>, config: QueueConfig) -> Self {
        Self { sqs_client, config }
    }

    /// Returns the queue URL this queue operates on
    #[must_use]
    pub fn queue_url(&self) -> &str {
        &self.config.queue_url
    }

    fn into_queue_message(msg: &aws_sdk_sqs::types::Message) -> Option<QueueMessage> {
        let Some(receipt_handle) = msg.receipt_handle() else {
            tracing::error!(
                "Received message {} without a receipt handle, skipping",
                msg.message_id().unwrap_or("<unknown>")
            );
            return None;
        };

        let attributes = msg
            .attributes()
            .map(|attrs| {
                attrs
                    .iter()
                    .map(|(name, value)| (name.as_str().to_string(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Some(QueueMessage {
            body: msg.body().unwrap_or_default().to_string(),
            receipt_handle: receipt_handle.to_string(),
            message_id: msg.message_id().unwrap_or_default().to_string(),
            attributes,
        })
    }
}

#[async_trait]
impl QueueService for SqsQueue {
    async fn receive_messages(&self, request: ReceiveRequest) -> QueueResult<Vec<QueueMessage>> {
        let result = self
            .sqs_client
            .receive_message()
            .queue_url(&self.config.queue_url)
            .max_number_of_messages(request.max_messages)
            .wait_time_seconds(request.wait_time_seconds)
            .message_system_attribute_names(MessageSystemAttributeName::All)
            .send()
            .await?;

        let messages = result
            .messages()
            .iter()
            .filter_map(Self::into_queue_message)
            .collect::<Vec<_>>();

        tracing::debug!("Received {} messages from {}", messages.len(), self.queue_url());

        Ok(messages)
    }

    async fn delete_message(&self, receipt_handle: &str) -> QueueResult<()> {
        self.sqs_client
            .delete_message()
            .queue_url(&self.config.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;

        Ok(())
    }

    async fn send_message(&self, message: &OutgoingMessage) -> QueueResult<String> {
        message.validate()?;

        let mut request = self
            .sqs_client
            .send_message()
            .queue_url(&self.config.queue_url)
            .message_body(&message.body)
            .message_group_id(&message.message_group_id);

        // Queues with content-based deduplication accept an absent ID
        if !message.message_deduplication_id.is_empty() {
            request = request.message_deduplication_id(&message.message_deduplication_id);
        }

        let result = request.send().await?;

        Ok(result
            .message_id()
            .map(std::string::ToString::to_string)
            .unwrap_or_default())
    }
}
