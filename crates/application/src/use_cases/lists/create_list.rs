use super::ListSource;
use crate::ports::{DevicePolicyPort, ListStorePort};
use std::sync::Arc;
use tracing::{info, warn};
use warden_dns_domain::{DomainError, ListName};

pub struct CreateListUseCase {
    lists: Arc<dyn ListStorePort>,
    policy: Arc<dyn DevicePolicyPort>,
}

impl CreateListUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>, policy: Arc<dyn DevicePolicyPort>) -> Self {
        Self { lists, policy }
    }

    /// Create (or extend) a list from a URL or inline items. When no name is
    /// given it is inferred from the URL's last path segment, falling back to
    /// its hostname. Returns the display name and how many rules were added.
    pub async fn execute(
        &self,
        name: Option<String>,
        source: ListSource,
        device_id: Option<&str>,
    ) -> Result<(String, usize), DomainError> {
        let display_name = match (name, &source) {
            (Some(n), _) if !n.trim().is_empty() => n.trim().to_string(),
            (_, ListSource::Url(url)) => infer_name_from_url(url)
                .ok_or_else(|| DomainError::MalformedInput("missing list name".to_string()))?,
            _ => return Err(DomainError::MalformedInput("missing list name".to_string())),
        };

        let list_name = match device_id {
            Some(device) => ListName::scoped(device, &display_name)?,
            None => ListName::new(&display_name)?,
        };

        let added = match source {
            ListSource::Url(url) => self.lists.append_from_url(&list_name, &url, true).await?,
            ListSource::Items(items) if !items.is_empty() => {
                self.lists.append_items(&list_name, &items, true).await?
            }
            ListSource::Items(_) => {
                return Err(DomainError::MalformedInput(
                    "missing url or items".to_string(),
                ))
            }
        };

        if let Some(device) = device_id {
            // The import already succeeded; a failed association is logged,
            // not surfaced.
            if let Err(e) = self.policy.enable_list(device, list_name.as_str()).await {
                warn!(device = %device, list = %list_name, error = %e, "Failed to associate list with device");
            }
        }

        info!(list = %list_name, added, "List created");
        Ok((display_name, added))
    }
}

fn infer_name_from_url(raw: &str) -> Option<String> {
    let url = url::Url::parse(raw).ok()?;
    let base = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(|segment| match segment.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
            _ => segment.to_string(),
        })
        .filter(|s| !s.is_empty());

    base.or_else(|| url.host_str().map(str::to_string))
}
