//! Environment configuration for the queue tools

use std::time::Duration;

use anyhow::Context;
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_credential_types::{provider::ProvideCredentials, Credentials};
use aws_sdk_sqs::Client as SqsClient;
use clap::ValueEnum;
use strum::{Display, EnumString};

/// `LocalStack` edge endpoint used in development
const LOCALSTACK_ENDPOINT_URL: &str = "http://localhost:4566";

/// Region reported to `LocalStack`, which accepts any region
const LOCALSTACK_REGION: &str = "us-east-1";

/// Upper bound for a single SQS call, longer than the 20 second maximum long poll
const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, ValueEnum)]
#[strum(serialize_all = "snake_case")]
pub enum Environment {
    /// Real AWS, credentials from the default provider chain
    Production,
    /// `LocalStack` with static test credentials
    Development,
}

impl Environment {
    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production => None,
            Self::Development => Some(LOCALSTACK_ENDPOINT_URL),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(OPERATION_TIMEOUT)
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            loader = loader
                .endpoint_url(endpoint_url)
                .region(Region::new(LOCALSTACK_REGION))
                .credentials_provider(Credentials::from_keys("test", "test", None));
        }

        loader.load().await
    }

    /// Builds an SQS client after checking that credentials resolve
    ///
    /// # Errors
    ///
    /// Returns an error if no region is configured, no credentials provider
    /// is configured, or the provider cannot produce credentials
    pub async fn sqs_client(&self) -> anyhow::Result<SqsClient> {
        let config = self.aws_config().await;

        config.region().context("No AWS region configured")?;

        config
            .credentials_provider()
            .context("No AWS credentials provider configured")?
            .provide_credentials()
            .await
            .context("Failed to resolve AWS credentials")?;

        Ok(SqsClient::new(&config))
    }
}
