use crate::ports::{DevicePolicyPort, ListStorePort};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use warden_dns_domain::list::sanitize_device_id;
use warden_dns_domain::DomainError;

pub struct GetListsUseCase {
    lists: Arc<dyn ListStorePort>,
    policy: Arc<dyn DevicePolicyPort>,
}

impl GetListsUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>, policy: Arc<dyn DevicePolicyPort>) -> Self {
        Self { lists, policy }
    }

    /// Name → rule count. With a device id, only that device's lists are
    /// returned and the device prefix is stripped for display.
    pub async fn execute(&self, device_id: Option<&str>) -> Result<HashMap<String, usize>, DomainError> {
        let counts = self.lists.list_counts();

        let Some(device) = device_id else {
            return Ok(counts.into_iter().collect());
        };

        let enabled = match self.policy.enabled_lists(device).await {
            Ok(lists) => lists,
            Err(e) => {
                warn!(device = %device, error = %e, "Policy lookup failed; returning no lists");
                return Ok(HashMap::new());
            }
        };

        let prefix = format!("{}_", sanitize_device_id(device));
        Ok(counts
            .into_iter()
            .filter(|(name, _)| enabled.iter().any(|l| l == name))
            .map(|(name, count)| {
                let display = name.strip_prefix(&prefix).unwrap_or(&name).to_string();
                (display, count)
            })
            .collect())
    }
}
