use crate::ports::ListStorePort;
use std::sync::Arc;
use tracing::info;
use warden_dns_domain::{DomainError, ListName};

pub struct ReplaceListUseCase {
    lists: Arc<dyn ListStorePort>,
}

impl ReplaceListUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self { lists }
    }

    /// Overwrite the list with the parsed contents of `url`.
    pub async fn execute(&self, name: &ListName, url: &str) -> Result<usize, DomainError> {
        let written = self.lists.replace_from_url(name, url).await?;
        info!(list = %name, written, "List replaced");
        Ok(written)
    }
}
