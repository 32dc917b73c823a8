use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use warden_dns_application::ports::ListStorePort;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(86_400);

/// Periodically re-scans the list directory so edits made outside the
/// control plane become visible without a manual `/reload`.
///
/// The first tick is consumed immediately; the store already loaded during
/// startup.
pub struct ListResyncJob {
    lists: Arc<dyn ListStorePort>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl ListResyncJob {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self {
            lists,
            interval: DEFAULT_INTERVAL,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting list resync job"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("List resync job stopped");
                    break;
                }
                _ = interval.tick() => {
                    match self.lists.load_all().await {
                        Ok(()) => info!("List resync completed"),
                        Err(e) => error!(error = %e, "List resync failed"),
                    }
                }
            }
        }
    }
}
