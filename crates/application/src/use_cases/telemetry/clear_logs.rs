use crate::ports::TelemetrySink;
use std::sync::Arc;
use tracing::info;
use warden_dns_domain::DomainError;

pub struct ClearLogsUseCase {
    telemetry: Arc<dyn TelemetrySink>,
}

impl ClearLogsUseCase {
    pub fn new(telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { telemetry }
    }

    pub async fn execute(&self) -> Result<(), DomainError> {
        self.telemetry.clear().await?;
        info!("Query logs cleared");
        Ok(())
    }
}
