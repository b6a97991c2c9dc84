//! Synthesizes the messages the producer publishes

use chrono::{DateTime, SecondsFormat, Utc};
use fifo_queue::OutgoingMessage;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Group ID used when identifiers are not randomized
pub const FIXED_MESSAGE_GROUP_ID: &str = "Group1";

/// Randomized group IDs are drawn from `Group0..Group{N-1}`
pub const RANDOM_GROUP_COUNT: u32 = 100;

/// How group and deduplication IDs are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Constant group, `FixedDedupID<index>` deduplication IDs
    Fixed,
    /// Random group from a bounded set, nanosecond timestamp deduplication IDs
    Randomized,
}

/// Builds outgoing messages according to an [`IdPolicy`]
pub struct MessageFactory {
    policy: IdPolicy,
    rng: StdRng,
    last_dedup_nanos: Option<i64>,
}

impl MessageFactory {
    /// Creates a factory seeded from the operating system
    #[must_use]
    pub fn new(policy: IdPolicy) -> Self {
        Self::from_rng(policy, StdRng::from_entropy())
    }

    /// Creates a factory with a fixed seed for reproducible group IDs
    #[must_use]
    pub fn with_seed(policy: IdPolicy, seed: u64) -> Self {
        Self::from_rng(policy, StdRng::seed_from_u64(seed))
    }

    const fn from_rng(policy: IdPolicy, rng: StdRng) -> Self {
        Self {
            policy,
            rng,
            last_dedup_nanos: None,
        }
    }

    /// Returns the identifier policy this factory was built with
    #[must_use]
    pub const fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Builds message number `index` (1-based) stamped with the current time
    pub fn build(&mut self, index: usize) -> OutgoingMessage {
        self.build_at(index, Utc::now())
    }

    fn build_at(&mut self, index: usize, now: DateTime<Utc>) -> OutgoingMessage {
        let body = format!(
            "MessageID {} - Generated at: {}",
            now.timestamp(),
            now.to_rfc3339_opts(SecondsFormat::Secs, true)
        );

        let (message_group_id, message_deduplication_id) = match self.policy {
            IdPolicy::Fixed => (
                FIXED_MESSAGE_GROUP_ID.to_string(),
                format!("FixedDedupID{index}"),
            ),
            IdPolicy::Randomized => (
                format!("Group{}", self.rng.gen_range(0..RANDOM_GROUP_COUNT)),
                self.next_dedup_nanos(now).to_string(),
            ),
        };

        OutgoingMessage {
            body,
            message_group_id,
            message_deduplication_id,
        }
    }

    /// Nanosecond timestamp, bumped past the previous one if the clock has not moved
    fn next_dedup_nanos(&mut self, now: DateTime<Utc>) -> i64 {
        let nanos = now.timestamp_nanos_opt().unwrap_or_default();
        let next = match self.last_dedup_nanos {
            Some(last) if nanos <= last => last.saturating_add(1),
            _ => nanos,
        };
        self.last_dedup_nanos = Some(next);
        next
    }
}
