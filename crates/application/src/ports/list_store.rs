use async_trait::async_trait;
use warden_dns_domain::{DomainError, ListName};

/// The list store owns the on-disk rule files and the compiled match index.
///
/// Mutators rewrite the whole file and reload; a failed write never advances
/// the published snapshot. The `matches_*` reads run against the current
/// snapshot without blocking writers.
#[async_trait]
pub trait ListStorePort: Send + Sync {
    /// Re-scan the directory and publish a fresh snapshot.
    async fn load_all(&self) -> Result<(), DomainError>;

    /// Fetch a URL and union its parsed rules into the named list.
    /// Returns the number of rules that were new.
    async fn append_from_url(
        &self,
        name: &ListName,
        url: &str,
        create_if_missing: bool,
    ) -> Result<usize, DomainError>;

    /// Union free-form items (split on commas, whitespace and newlines) into
    /// the named list. Returns the number of rules that were new.
    async fn append_items(
        &self,
        name: &ListName,
        items: &[String],
        create_if_missing: bool,
    ) -> Result<usize, DomainError>;

    /// Overwrite the named list with the parsed contents of a URL.
    /// Returns the number of rules written.
    async fn replace_from_url(&self, name: &ListName, url: &str) -> Result<usize, DomainError>;

    /// Drop one exact rule from the list. `Ok(false)` when the rule was not
    /// present.
    async fn remove_domain(&self, name: &ListName, domain: &str) -> Result<bool, DomainError>;

    /// Remove the list file and reload.
    async fn delete_list(&self, name: &ListName) -> Result<(), DomainError>;

    /// Fetch and parse a URL without persisting anything.
    /// Returns the parsed rules in file order.
    async fn preview_from_url(&self, url: &str) -> Result<Vec<String>, DomainError>;

    /// Substring-filtered, paginated view of one list in the current snapshot.
    fn list_domains(
        &self,
        name: &ListName,
        offset: usize,
        limit: usize,
        query: &str,
    ) -> Result<(usize, Vec<String>), DomainError>;

    /// Every list in the current snapshot with its rule count.
    fn list_counts(&self) -> Vec<(String, usize)>;

    /// Whether the domain matches any rule of any list.
    fn matches_any(&self, domain: &str) -> bool;

    /// Whether the domain matches any rule of the named lists.
    fn matches_lists(&self, domain: &str, lists: &[String]) -> bool;
}
