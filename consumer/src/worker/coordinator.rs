use std::sync::Arc;

use fifo_queue::QueueService;
use futures::future::join_all;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::message_processor::MessageProcessor;
use super::WorkerConfig;

/// `Coordinator` manages the lifecycle of the polling workers
pub struct Coordinator {
    config: WorkerConfig,
    queue: Arc<dyn QueueService>,
    shutdown_token: CancellationToken,
}

impl Coordinator {
    /// Creates a new `Coordinator`
    #[must_use]
    pub fn new(config: WorkerConfig, queue: Arc<dyn QueueService>) -> Self {
        Self {
            config,
            queue,
            shutdown_token: CancellationToken::new(),
        }
    }

    /// Returns a clone of the shutdown token for external control
    #[must_use]
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Starts the workers and blocks until shutdown completes
    ///
    /// Returns only after the shutdown token has been cancelled and every
    /// worker has finished its current cycle and exited.
    pub async fn start(self) {
        info!(
            "Starting coordinator with {} workers (max messages: {}, wait time: {}s)",
            self.config.num_workers, self.config.max_messages, self.config.wait_time_seconds
        );

        let processor_handles = self.spawn_processors();

        self.shutdown_token.cancelled().await;
        info!("Coordinator shutdown initiated, waiting for workers to finish their current cycle");

        for (worker_id, result) in join_all(processor_handles).await.into_iter().enumerate() {
            if let Err(e) = result {
                error!("Consumer #{} task error: {}", worker_id, e);
            }
        }

        info!("All workers stopped");
    }

    /// Spawns one polling task per configured worker
    fn spawn_processors(&self) -> Vec<JoinHandle<()>> {
        (0..self.config.num_workers)
            .map(|worker_id| {
                let processor = MessageProcessor::new(
                    worker_id,
                    Arc::clone(&self.queue),
                    self.config.receive_request(),
                    self.config.processing_delay,
                );
                let shutdown_token = self.shutdown_token.clone();

                tokio::spawn(async move {
                    processor.run(shutdown_token).await;
                })
            })
            .collect()
    }
}
