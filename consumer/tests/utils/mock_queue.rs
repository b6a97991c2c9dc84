//! Scripted in-memory stand-in for the SQS queue

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_sqs::error::SdkError;
use fifo_queue::{OutgoingMessage, QueueError, QueueMessage, QueueResult, QueueService, ReceiveRequest};
use tokio::time::Instant;

/// A receive failure as the SDK reports a timed out call
pub fn receive_failure() -> QueueResult<Vec<QueueMessage>> {
    Err(QueueError::ReceiveMessage(SdkError::timeout_error(
        "receive timed out",
    )))
}

/// Mock queue that replays scripted receive results
///
/// Once the script is exhausted every receive behaves like an empty long poll:
/// it sleeps for the requested wait time and returns no messages.
#[derive(Default)]
pub struct MockQueue {
    script: Mutex<VecDeque<QueueResult<Vec<QueueMessage>>>>,
    fail_deletes: bool,
    receive_calls: Mutex<Vec<Instant>>,
    receives_in_flight: AtomicUsize,
    max_receives_in_flight: AtomicUsize,
    delete_attempts: Mutex<Vec<(String, Instant)>>,
}

impl MockQueue {
    /// Creates a mock that only ever returns empty long polls
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a mock that replays `script` before falling back to empty polls
    pub fn scripted(script: Vec<QueueResult<Vec<QueueMessage>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        }
    }

    /// Makes every delete fail with an upstream error
    pub fn with_failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    /// Times at which receive calls were issued
    pub fn receive_calls(&self) -> Vec<Instant> {
        self.receive_calls.lock().unwrap().clone()
    }

    pub fn receive_count(&self) -> usize {
        self.receive_calls.lock().unwrap().len()
    }

    pub fn receives_in_flight(&self) -> usize {
        self.receives_in_flight.load(Ordering::SeqCst)
    }

    pub fn max_receives_in_flight(&self) -> usize {
        self.max_receives_in_flight.load(Ordering::SeqCst)
    }

    /// Receipt handles passed to delete, in call order
    pub fn delete_attempts(&self) -> Vec<String> {
        self.delete_attempts
            .lock()
            .unwrap()
            .iter()
            .map(|(handle, _)| handle.clone())
            .collect()
    }

    /// Time at which the delete for `receipt_handle` was issued
    pub fn deleted_at(&self, receipt_handle: &str) -> Option<Instant> {
        self.delete_attempts
            .lock()
            .unwrap()
            .iter()
            .find(|(handle, _)| handle == receipt_handle)
            .map(|(_, at)| *at)
    }
}

#[async_trait]
impl QueueService for MockQueue {
    async fn receive_messages(&self, request: ReceiveRequest) -> QueueResult<Vec<QueueMessage>> {
        self.receive_calls.lock().unwrap().push(Instant::now());

        let next = self.script.lock().unwrap().pop_front();
        if let Some(result) = next {
            return result;
        }

        let in_flight = self.receives_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_receives_in_flight
            .fetch_max(in_flight, Ordering::SeqCst);

        let wait = u64::try_from(request.wait_time_seconds).unwrap_or_default();
        tokio::time::sleep(Duration::from_secs(wait)).await;

        self.receives_in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn delete_message(&self, receipt_handle: &str) -> QueueResult<()> {
        self.delete_attempts
            .lock()
            .unwrap()
            .push((receipt_handle.to_string(), Instant::now()));

        if self.fail_deletes {
            return Err(QueueError::DeleteMessage(SdkError::timeout_error(
                "delete timed out",
            )));
        }
        Ok(())
    }

    async fn send_message(&self, _message: &OutgoingMessage) -> QueueResult<String> {
        Err(QueueError::InvalidMessage(
            "consumer tests never send".to_string(),
        ))
    }
}
