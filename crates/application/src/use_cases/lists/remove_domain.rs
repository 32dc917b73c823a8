use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::{DomainError, ListName};

pub struct RemoveDomainUseCase {
    lists: Arc<dyn ListStorePort>,
}

impl RemoveDomainUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self { lists }
    }

    /// `Ok(false)` when the exact normalized rule was not in the list.
    pub async fn execute(&self, name: &ListName, domain: &str) -> Result<bool, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::MalformedInput("missing domain".to_string()));
        }
        self.lists.remove_domain(name, domain).await
    }
}
