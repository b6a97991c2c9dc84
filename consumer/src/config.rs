//! Command line configuration for the consumer

use std::time::Duration;

use clap::Parser;
use fifo_queue::CommonArgs;

use crate::worker::WorkerConfig;

/// Consume messages from an SQS FIFO queue with a pool of polling workers
#[derive(Debug, Clone, Parser)]
#[command(name = "consumer", version)]
pub struct ConsumerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of concurrent polling workers
    #[arg(
        long,
        env = "CONSUMER_THREADS",
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=100)
    )]
    pub threads: u16,

    /// Maximum number of messages to receive per poll
    #[arg(
        long,
        env = "CONSUMER_MAX_MESSAGES",
        default_value_t = 1,
        value_parser = clap::value_parser!(i32).range(1..=10)
    )]
    pub max_messages: i32,

    /// Long-poll wait time in seconds
    #[arg(
        long,
        env = "CONSUMER_WAIT_TIME_SECONDS",
        default_value_t = 10,
        value_parser = clap::value_parser!(i32).range(0..=20)
    )]
    pub wait_time_seconds: i32,

    /// Simulated processing time per message, in milliseconds
    #[arg(long, env = "CONSUMER_PROCESSING_DELAY_MS", default_value_t = 2000)]
    pub processing_delay_ms: u64,
}

impl ConsumerArgs {
    /// Returns the worker pool configuration
    #[must_use]
    pub fn worker_config(&self) -> WorkerConfig {
        WorkerConfig {
            num_workers: usize::from(self.threads),
            max_messages: self.max_messages,
            wait_time_seconds: self.wait_time_seconds,
            processing_delay: Duration::from_millis(self.processing_delay_ms),
        }
    }
}
