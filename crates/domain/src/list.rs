use crate::errors::DomainError;

/// A blocklist identifier, usable as a file stem inside the list directory.
///
/// Accepts ASCII alphanumerics plus `.`, `-` and `_`, rejecting anything that
/// could escape the directory (`/`, `..`, empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListName(String);

impl ListName {
    pub fn new(raw: &str) -> Result<ListName, DomainError> {
        let name = raw.trim();
        if name.is_empty()
            || name == "."
            || name == ".."
            || !name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
        {
            return Err(DomainError::InvalidListName(raw.to_string()));
        }
        Ok(ListName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical file name inside the list directory.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.0)
    }

    /// Namespace a list under a device identifier, the scheme the control
    /// plane uses to keep per-device lists apart on disk.
    pub fn scoped(device_id: &str, name: &str) -> Result<ListName, DomainError> {
        ListName::new(&format!("{}_{}", sanitize_device_id(device_id), name.trim()))
    }

    /// Strip a device prefix for display, when present.
    pub fn display_name<'a>(&'a self, device_id: &str) -> &'a str {
        let prefix = sanitize_device_id(device_id);
        self.0
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(&self.0)
    }
}

impl std::fmt::Display for ListName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Device identifiers are nominally MAC addresses (`aa:bb:…`) with an
/// `ip:<addr>` fallback; both contain `:`, which is not filesystem-safe.
pub fn sanitize_device_id(device_id: &str) -> String {
    device_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}
