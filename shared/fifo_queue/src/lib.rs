//! FIFO queue access shared by the producer and consumer tools
//!
//! This crate wraps AWS SQS FIFO queues behind the [`QueueService`] trait so the
//! worker pool and the publisher can run against a real queue or a test double.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Command line arguments shared by both tools
pub mod cli;
/// AWS environment and client configuration
pub mod environment;
/// Error types for queue operations
pub mod error;
/// The queue service abstraction
pub mod service;
/// SQS-backed queue implementation
pub mod sqs_queue;
/// Tracing subscriber setup for the binaries
pub mod telemetry;
/// Common types for queue operations
pub mod types;

pub use cli::CommonArgs;
pub use environment::Environment;
pub use error::{QueueError, QueueResult};
pub use service::QueueService;
pub use sqs_queue::SqsQueue;
pub use types::{OutgoingMessage, QueueConfig, QueueMessage, ReceiveRequest};
