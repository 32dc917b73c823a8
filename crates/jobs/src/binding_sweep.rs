use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use warden_dns_application::ports::ClientBindingsPort;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(3600);

/// Hourly sweep of stale IP→device bindings. Sessions live in the external
/// auth store; this keeps the resolver-side cache from holding bindings past
/// the session lifetime.
pub struct BindingSweepJob {
    bindings: Arc<dyn ClientBindingsPort>,
    max_age_secs: u64,
    interval: Duration,
    shutdown: CancellationToken,
}

impl BindingSweepJob {
    pub fn new(bindings: Arc<dyn ClientBindingsPort>, max_age_secs: u64) -> Self {
        Self {
            bindings,
            max_age_secs,
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
            max_age_secs = self.max_age_secs,
            "Starting binding sweep job"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("Binding sweep job stopped");
                    break;
                }
                _ = interval.tick() => {
                    let swept = self.bindings.sweep_expired(self.max_age_secs);
                    if swept > 0 {
                        info!(swept, "Expired client bindings dropped");
                    } else {
                        debug!("No expired client bindings");
                    }
                }
            }
        }
    }
}
