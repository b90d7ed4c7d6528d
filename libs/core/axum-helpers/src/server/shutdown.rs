use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;

/// Blocks until the process receives SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn wait_for_termination_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C)"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

/// Fans a termination signal out to every subsystem that needs to wind down.
///
/// The server loop waits on [`ShutdownCoordinator::wait_for_signal`]; cleanup
/// tasks hold a [`subscribe`](ShutdownCoordinator::subscribe)d receiver or
/// poll [`is_shutting_down`](ShutdownCoordinator::is_shutting_down). The
/// shutdown flag latches: repeated triggers broadcast only once.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (tx, rx) = broadcast::channel(1);
        let coordinator = Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, rx)
    }

    /// A fresh receiver that fires when shutdown begins.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Mark the process as shutting down and notify subscribers once.
    pub fn shutdown(&self) {
        let first = self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();

        if first {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Wait for a termination signal, then trigger [`shutdown`](Self::shutdown).
    pub async fn wait_for_signal(&self) {
        wait_for_termination_signal().await;
        self.shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new().0
    }
}

/// Plain shutdown future for `axum::serve(...).with_graceful_shutdown(...)`.
///
/// Use [`ShutdownCoordinator`] instead when cleanup work (closing pools,
/// flushing buffers) has to run alongside the server winding down.
pub async fn shutdown_signal() {
    wait_for_termination_signal().await;
    info!("Shutting down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_latches_and_broadcasts_once() {
        let (coordinator, mut rx) = ShutdownCoordinator::new();

        assert!(!coordinator.is_shutting_down());

        coordinator.shutdown();
        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        rx.recv().await.unwrap();
        // The second trigger must not have queued another message
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_subscribers_see_shutdown() {
        let (coordinator, _rx) = ShutdownCoordinator::new();
        let mut late = coordinator.subscribe();

        coordinator.shutdown();
        late.recv().await.unwrap();
    }
}
