use clap::Args;

use crate::environment::Environment;
use crate::types::QueueConfig;

/// Arguments every tool accepts
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// URL of the SQS FIFO queue
    #[arg(long, env = "QUEUE_URL")]
    pub queue_url: String,

    /// Target environment; `development` talks to `LocalStack`
    #[arg(long = "env", env = "APP_ENV", value_enum, default_value_t = Environment::Production)]
    pub environment: Environment,
}

impl CommonArgs {
    /// Returns the queue configuration for the selected queue
    #[must_use]
    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig::new(self.queue_url.clone())
    }
}
