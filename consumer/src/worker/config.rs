use std::time::Duration;

use fifo_queue::ReceiveRequest;

/// Configuration for the polling worker pool
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Number of worker tasks to spawn
    pub num_workers: usize,
    /// Maximum number of messages requested per receive
    pub max_messages: i32,
    /// Long-poll wait time per receive, in seconds
    pub wait_time_seconds: i32,
    /// Simulated processing time per message
    pub processing_delay: Duration,
}

impl WorkerConfig {
    /// Returns the receive parameters every worker polls with
    #[must_use]
    pub const fn receive_request(&self) -> ReceiveRequest {
        ReceiveRequest {
            max_messages: self.max_messages,
            wait_time_seconds: self.wait_time_seconds,
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            num_workers: 2,
            max_messages: 1,
            wait_time_seconds: 10,
            processing_delay: Duration::from_secs(2),
        }
    }
}
