use crate::ports::{DevicePolicyPort, ListStorePort};
use std::sync::Arc;
use tracing::{info, warn};
use warden_dns_domain::{DomainError, ListName};

pub struct DeleteListUseCase {
    lists: Arc<dyn ListStorePort>,
    policy: Arc<dyn DevicePolicyPort>,
}

impl DeleteListUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>, policy: Arc<dyn DevicePolicyPort>) -> Self {
        Self { lists, policy }
    }

    pub async fn execute(&self, name: &ListName, device_id: Option<&str>) -> Result<(), DomainError> {
        self.lists.delete_list(name).await?;

        if let Some(device) = device_id {
            if let Err(e) = self.policy.disable_list(device, name.as_str()).await {
                warn!(device = %device, list = %name, error = %e, "Failed to drop list association");
            }
        }

        info!(list = %name, "List deleted");
        Ok(())
    }
}
