pub mod analytics;
pub mod config;
pub mod items;
pub mod lists;
pub mod logs;
pub mod system;

pub use analytics::get_analytics;
pub use config::{get_config, update_config};
pub use items::{get_list_items, remove_list_item};
pub use lists::{append_list, create_list, delete_list, get_lists, replace_list};
pub use logs::{delete_logs, get_logs};
pub use system::{health, reload, validate};

use crate::dto::ItemsField;
use crate::errors::ApiError;
use crate::middleware::Session;
use warden_dns_application::use_cases::ListSource;
use warden_dns_domain::{DomainError, ListName};

/// Lists are namespaced per device when the request carries an identity, so a
/// device can only ever address its own files.
pub(crate) fn scoped_list_name(session: &Session, name: &str) -> Result<ListName, ApiError> {
    let list = match session.device_id.as_deref() {
        Some(device) => ListName::scoped(device, name)?,
        None => ListName::new(name)?,
    };
    Ok(list)
}

/// A URL wins over inline items, matching the create/append request shape.
pub(crate) fn source_from(
    url: Option<String>,
    items: Option<ItemsField>,
) -> Result<ListSource, ApiError> {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        return Ok(ListSource::Url(url));
    }
    let items = items.map(ItemsField::into_vec).unwrap_or_default();
    if items.is_empty() {
        return Err(DomainError::MalformedInput("missing url or items".to_string()).into());
    }
    Ok(ListSource::Items(items))
}
