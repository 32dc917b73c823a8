use crate::ports::ListStorePort;
use std::sync::Arc;
use tracing::info;
use warden_dns_domain::DomainError;

pub struct ReloadListsUseCase {
    lists: Arc<dyn ListStorePort>,
}

impl ReloadListsUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self { lists }
    }

    pub async fn execute(&self) -> Result<(), DomainError> {
        self.lists.load_all().await?;
        info!("Lists reloaded");
        Ok(())
    }
}
