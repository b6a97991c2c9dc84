#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_sqs::error::SdkError;
use fifo_queue::{OutgoingMessage, QueueError, QueueMessage, QueueResult, QueueService, ReceiveRequest};
use tokio::time::Instant;

/// Mock queue that records every send attempt
#[derive(Default)]
pub struct RecordingQueue {
    sends: Mutex<Vec<(OutgoingMessage, Instant)>>,
    failing_attempts: HashSet<usize>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given 1-based send attempts fail
    pub fn failing_on(attempts: &[usize]) -> Self {
        Self {
            failing_attempts: attempts.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sends
            .lock()
            .unwrap()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }

    pub fn sent_at(&self) -> Vec<Instant> {
        self.sends.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl QueueService for RecordingQueue {
    async fn receive_messages(&self, _request: ReceiveRequest) -> QueueResult<Vec<QueueMessage>> {
        Ok(Vec::new())
    }

    async fn delete_message(&self, _receipt_handle: &str) -> QueueResult<()> {
        Ok(())
    }

    async fn send_message(&self, message: &OutgoingMessage) -> QueueResult<String> {
        let attempt = {
            let mut sends = self.sends.lock().unwrap();
            sends.push((message.clone(), Instant::now()));
            sends.len()
        };

        if self.failing_attempts.contains(&attempt) {
            return Err(QueueError::SendMessage(SdkError::timeout_error(
                "send timed out",
            )));
        }
        Ok(format!("message-{attempt}"))
    }
}
