use crate::ports::{ClientBindingsPort, DevicePolicyPort, ListStorePort};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::warn;
use warden_dns_domain::UnknownDevicePolicy;

/// Outcome of the per-client policy check for one question name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryVerdict {
    pub blocked: bool,
    /// Device the client IP resolved to, when a binding existed.
    pub device_id: Option<String>,
}

/// The composite matcher of the packet path: client IP → device binding →
/// enabled lists → per-list pattern match.
pub struct EvaluateQueryUseCase {
    bindings: Arc<dyn ClientBindingsPort>,
    policy: Arc<dyn DevicePolicyPort>,
    lists: Arc<dyn ListStorePort>,
    unknown_device_policy: UnknownDevicePolicy,
}

impl EvaluateQueryUseCase {
    pub fn new(
        bindings: Arc<dyn ClientBindingsPort>,
        policy: Arc<dyn DevicePolicyPort>,
        lists: Arc<dyn ListStorePort>,
        unknown_device_policy: UnknownDevicePolicy,
    ) -> Self {
        Self {
            bindings,
            policy,
            lists,
            unknown_device_policy,
        }
    }

    /// `domain` must already be normalized (lowercase, no trailing dot).
    pub async fn execute(&self, domain: &str, client_ip: IpAddr) -> QueryVerdict {
        let Some(device_id) = self.bindings.lookup(client_ip) else {
            let blocked = match self.unknown_device_policy {
                UnknownDevicePolicy::Allow => false,
                UnknownDevicePolicy::Global => self.lists.matches_any(domain),
            };
            return QueryVerdict {
                blocked,
                device_id: None,
            };
        };

        let enabled = match self.policy.enabled_lists(&device_id).await {
            Ok(lists) => lists,
            Err(e) => {
                // A failing policy store must not take the resolver down with
                // it; the query falls through unblocked.
                warn!(device = %device_id, error = %e, "Policy lookup failed");
                return QueryVerdict {
                    blocked: false,
                    device_id: Some(device_id),
                };
            }
        };

        let blocked = !enabled.is_empty() && self.lists.matches_lists(domain, &enabled);
        QueryVerdict {
            blocked,
            device_id: Some(device_id),
        }
    }
}
