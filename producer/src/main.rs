use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use fifo_queue::{telemetry, QueueService, SqsQueue};
use tracing::{error, info};

use fifo_producer::config::ProducerArgs;
use fifo_producer::publisher::Publisher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let args = ProducerArgs::parse();
    info!(
        "Starting producer for {} in {} environment",
        args.common.queue_url, args.common.environment
    );

    // Fatal before any message is sent
    let sqs_client = args
        .common
        .environment
        .sqs_client()
        .await
        .context("Failed to load AWS configuration")?;

    let queue: Arc<dyn QueueService> = Arc::new(SqsQueue::new(
        Arc::new(sqs_client),
        args.common.queue_config(),
    ));

    let publisher = Publisher::new(queue, args.publisher_config());

    let shutdown_token = publisher.shutdown_token();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C, stopping after the current send...");
                shutdown_token.cancel();
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    publisher.run().await;

    info!("Producer stopped");
    Ok(())
}
