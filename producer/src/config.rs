//! Command line configuration for the producer

use std::time::Duration;

use clap::Parser;
use fifo_queue::CommonArgs;

use crate::message_factory::IdPolicy;
use crate::publisher::PublisherConfig;

/// Publish synthesized messages to an SQS FIFO queue
#[derive(Debug, Clone, Parser)]
#[command(name = "producer", version)]
pub struct ProducerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of messages to generate
    #[arg(long, env = "PRODUCER_NUM", default_value_t = 10)]
    pub num: usize,

    /// Randomize MessageGroupId and MessageDeduplicationId
    #[arg(long)]
    pub randomize_ids: bool,

    /// Pause after each send, in milliseconds
    #[arg(long, env = "PRODUCER_SEND_INTERVAL_MS", default_value_t = 1000)]
    pub send_interval_ms: u64,
}

impl ProducerArgs {
    /// Returns the publisher configuration
    #[must_use]
    pub const fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig {
            message_count: self.num,
            id_policy: if self.randomize_ids {
                IdPolicy::Randomized
            } else {
                IdPolicy::Fixed
            },
            send_interval: Duration::from_millis(self.send_interval_ms),
        }
    }
}
