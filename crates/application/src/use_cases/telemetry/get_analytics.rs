use crate::ports::TelemetrySink;
use std::sync::Arc;
use warden_dns_domain::AnalyticsSnapshot;

pub struct GetAnalyticsUseCase {
    telemetry: Arc<dyn TelemetrySink>,
}

impl GetAnalyticsUseCase {
    pub fn new(telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { telemetry }
    }

    pub fn execute(&self) -> AnalyticsSnapshot {
        self.telemetry.analytics()
    }
}
