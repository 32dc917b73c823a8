use async_trait::async_trait;
use warden_dns_domain::DomainError;

/// Read-mostly adapter over the external auth store's device→list table.
#[async_trait]
pub trait DevicePolicyPort: Send + Sync {
    /// List names the device has enabled; empty for unknown devices.
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, DomainError>;

    async fn enable_list(&self, device_id: &str, list: &str) -> Result<(), DomainError>;

    async fn disable_list(&self, device_id: &str, list: &str) -> Result<(), DomainError>;
}
