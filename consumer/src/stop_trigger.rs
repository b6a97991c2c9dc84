//! Operator stop trigger for the consumer

use std::io::{BufRead, BufReader};

use tokio::sync::oneshot;
use tracing::{error, info};

/// How the stdin watcher saw its read finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinEvent {
    /// A line, possibly empty, was read
    Line,
    /// Stdin was closed before a line arrived
    Closed,
}

/// Resolves once the operator asks the consumer to stop
///
/// Stops on a line or EOF on stdin, and on Ctrl+C.
pub async fn wait_for_stop_request() {
    let stdin_event = watch_for_enter(BufReader::new(std::io::stdin()));

    let enter = async {
        match stdin_event.await {
            Ok(StdinEvent::Line) => info!("Received Enter, initiating graceful shutdown..."),
            Ok(StdinEvent::Closed) => info!("Stdin closed, initiating graceful shutdown..."),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = enter => {}
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
    }
}

/// Reads one line from `reader` on a dedicated thread
///
/// The returned receiver resolves when a line (possibly empty) is read or the
/// reader is closed. A read error counts as closed. A plain thread is used
/// rather than a blocking task so a pending read never holds up runtime
/// shutdown.
pub fn watch_for_enter<R>(mut reader: R) -> oneshot::Receiver<StdinEvent>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        let mut line = String::new();
        let event = match reader.read_line(&mut line) {
            Ok(0) => StdinEvent::Closed,
            Ok(_) => StdinEvent::Line,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                StdinEvent::Closed
            }
        };
        let _ = tx.send(event);
    });

    rx
}
