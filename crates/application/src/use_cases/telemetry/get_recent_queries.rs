use crate::ports::TelemetrySink;
use std::sync::Arc;
use warden_dns_domain::QueryRecord;

pub struct GetRecentQueriesUseCase {
    telemetry: Arc<dyn TelemetrySink>,
}

impl GetRecentQueriesUseCase {
    pub fn new(telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { telemetry }
    }

    pub fn execute(&self, limit: usize) -> Vec<QueryRecord> {
        self.telemetry.recent(limit)
    }
}
