#![allow(dead_code)]

mod mock_queue;

pub use mock_queue::{receive_failure, MockQueue};

use std::collections::HashMap;

use fifo_queue::QueueMessage;

/// Initialise tracing for tests, ignoring repeated calls
pub fn setup_test_tracing() {
    fifo_queue::telemetry::init_tracing();
}

/// Builds a FIFO message as SQS would deliver it
pub fn fifo_message(index: usize) -> QueueMessage {
    QueueMessage {
        body: format!("message {index}"),
        receipt_handle: format!("rh-{index}"),
        message_id: format!("id-{index}"),
        attributes: HashMap::from([
            ("MessageGroupId".to_string(), "Group1".to_string()),
            (
                "MessageDeduplicationId".to_string(),
                format!("FixedDedupID{index}"),
            ),
        ]),
    }
}

/// Builds a message that carries no system attributes
pub fn bare_message(index: usize) -> QueueMessage {
    QueueMessage {
        body: format!("bare {index}"),
        receipt_handle: format!("rh-bare-{index}"),
        message_id: format!("id-bare-{index}"),
        attributes: HashMap::new(),
    }
}
