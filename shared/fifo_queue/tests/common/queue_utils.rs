//! Queue test setup utilities

#![allow(dead_code)]

use aws_sdk_sqs::Client as SqsClient;
use fifo_queue::Environment;
use std::sync::Arc;
use uuid::Uuid;

/// Test context that provides SQS client and queue setup
pub struct QueueTestContext {
    pub sqs_client: Arc<SqsClient>,
    pub queue_url: String,
}

impl QueueTestContext {
    /// Creates a new test context with a unique FIFO queue on `LocalStack`
    pub async fn new(test_name: &str) -> Self {
        let queue_name = format!("{}-{}.fifo", test_name, Uuid::new_v4());

        let sqs_client = Arc::new(
            Environment::Development
                .sqs_client()
                .await
                .expect("Failed to build LocalStack SQS client"),
        );

        // Explicit deduplication IDs only, so duplicate suppression is observable
        let result = sqs_client
            .create_queue()
            .queue_name(&queue_name)
            .attributes(aws_sdk_sqs::types::QueueAttributeName::FifoQueue, "true")
            .attributes(
                aws_sdk_sqs::types::QueueAttributeName::ContentBasedDeduplication,
                "false",
            )
            .send()
            .await
            .expect("Failed to create test queue");

        let queue_url = result
            .queue_url()
            .expect("Queue URL not returned")
            .to_string();

        Self {
            sqs_client,
            queue_url,
        }
    }
}

impl Drop for QueueTestContext {
    fn drop(&mut self) {
        let client = self.sqs_client.clone();
        let queue_url = self.queue_url.clone();

        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = client.delete_queue().queue_url(&queue_url).send().await;
            });
        }
    }
}
