use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use fifo_queue::{telemetry, QueueService, SqsQueue};
use tracing::info;

use fifo_consumer::config::ConsumerArgs;
use fifo_consumer::stop_trigger;
use fifo_consumer::worker::Coordinator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let args = ConsumerArgs::parse();
    info!(
        "Starting consumer for {} in {} environment",
        args.common.queue_url, args.common.environment
    );

    // Fatal before any worker starts
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

    let coordinator = Coordinator::new(args.worker_config(), queue);

    let shutdown_token = coordinator.shutdown_token();
    tokio::spawn(async move {
        stop_trigger::wait_for_stop_request().await;
        shutdown_token.cancel();
    });

    info!("Press Enter to stop consumers...");
    coordinator.start().await;

    info!("Consumer stopped");
    Ok(())
}
