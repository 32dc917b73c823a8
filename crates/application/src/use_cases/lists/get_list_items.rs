use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::{DomainError, ListName};

pub struct GetListItemsUseCase {
    lists: Arc<dyn ListStorePort>,
}

pub struct ListItemsPage {
    pub total: usize,
    pub items: Vec<String>,
    pub offset: usize,
    pub limit: usize,
}

impl GetListItemsUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self { lists }
    }

    pub fn execute(
        &self,
        name: &ListName,
        offset: usize,
        limit: usize,
        query: &str,
    ) -> Result<ListItemsPage, DomainError> {
        let limit = if limit == 0 { 100 } else { limit };
        let (total, items) = self.lists.list_domains(name, offset, limit, query)?;
        Ok(ListItemsPage {
            total,
            items,
            offset,
            limit,
        })
    }
}
