use super::ListSource;
use crate::ports::ListStorePort;
use std::sync::Arc;
use tracing::info;
use warden_dns_domain::{DomainError, ListName};

pub struct AppendToListUseCase {
    lists: Arc<dyn ListStorePort>,
}

impl AppendToListUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self { lists }
    }

    /// Union new rules into an existing list; the list must already exist.
    pub async fn execute(&self, name: &ListName, source: ListSource) -> Result<usize, DomainError> {
        let added = match source {
            ListSource::Url(url) => self.lists.append_from_url(name, &url, false).await?,
            ListSource::Items(items) if !items.is_empty() => {
                self.lists.append_items(name, &items, false).await?
            }
            ListSource::Items(_) => {
                return Err(DomainError::MalformedInput(
                    "missing url or items".to_string(),
                ))
            }
        };
        info!(list = %name, added, "List appended");
        Ok(added)
    }
}
