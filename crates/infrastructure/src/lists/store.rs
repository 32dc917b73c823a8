use super::catalog::{CompiledList, ListCatalog};
use super::parser;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};
use warden_dns_application::ports::ListStorePort;
use warden_dns_domain::{DomainError, ListName, ListsConfig, Rule};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// File-backed list store. Owns the blocklist directory exclusively: every
/// mutation computes the full new file contents, writes the file, then
/// rebuilds and atomically swaps the published catalog. Readers follow the
/// `ArcSwap` and never block writers.
pub struct FileListStore {
    dir: PathBuf,
    catalog: ArcSwap<ListCatalog>,
    write_lock: Mutex<()>,
    http: reqwest::Client,
    max_fetch_bytes: usize,
}

impl FileListStore {
    pub async fn new(config: &ListsConfig) -> Result<Self, DomainError> {
        std::fs::create_dir_all(&config.directory)?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("warden-dns/", env!("CARGO_PKG_VERSION"), " (list-sync)"))
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Io(e.to_string()))?;

        let store = Self {
            dir: PathBuf::from(&config.directory),
            catalog: ArcSwap::from_pointee(ListCatalog::default()),
            write_lock: Mutex::new(()),
            http,
            max_fetch_bytes: config.max_fetch_bytes,
        };

        // An unreadable directory at startup is fatal for the caller.
        store.reload_locked()?;
        Ok(store)
    }

    fn list_path(&self, name: &ListName) -> PathBuf {
        self.dir.join(name.file_name())
    }

    /// Scan every `*.txt` in the directory into a fresh catalog and swap it
    /// in. Files that fail to open are skipped, like any other unparseable
    /// line; only an unreadable directory is an error.
    fn reload_locked(&self) -> Result<(), DomainError> {
        let mut lists = HashMap::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            let is_txt = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
            if !is_txt {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    lists.insert(stem.to_string(), CompiledList::new(parser::parse_lines(&text)));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable list file");
                }
            }
        }

        let count = lists.len();
        self.catalog.store(Arc::new(ListCatalog::new(lists)));
        info!(lists = count, "List catalog published");
        Ok(())
    }

    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        let mut response =
            self.http
                .get(url)
                .send()
                .await
                .map_err(|e| DomainError::FetchFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::FetchRejected {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| DomainError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })? {
            if body.len() + chunk.len() > self.max_fetch_bytes {
                return Err(DomainError::FetchTooLarge {
                    url: url.to_string(),
                    limit: self.max_fetch_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn read_rules(&self, path: &Path) -> Result<Vec<Rule>, DomainError> {
        let text = tokio::fs::read_to_string(path).await?;
        Ok(parser::parse_lines(&text))
    }

    async fn write_rules<'a, I>(&self, path: &Path, rules: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = &'a Rule>,
    {
        let mut contents = String::new();
        for rule in rules {
            contents.push_str(rule.as_str());
            contents.push('\n');
        }
        tokio::fs::write(path, contents).await?;
        Ok(())
    }

    /// Union `new_rules` into the list, rewrite the file and republish.
    async fn union_and_write(
        &self,
        name: &ListName,
        new_rules: Vec<Rule>,
        create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        let path = self.list_path(name);
        let exists = tokio::fs::try_exists(&path).await.unwrap_or(false);
        if !exists && !create_if_missing {
            return Err(DomainError::ListNotFound(name.to_string()));
        }

        let mut set: BTreeSet<Rule> = if exists {
            self.read_rules(&path).await?.into_iter().collect()
        } else {
            BTreeSet::new()
        };

        let mut added = 0;
        for rule in new_rules {
            if set.insert(rule) {
                added += 1;
            }
        }

        self.write_rules(&path, set.iter()).await?;
        self.reload_locked()?;
        Ok(added)
    }
}

#[async_trait]
impl ListStorePort for FileListStore {
    async fn load_all(&self) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.reload_locked()
    }

    async fn append_from_url(
        &self,
        name: &ListName,
        url: &str,
        create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;
        let text = self.fetch(url).await?;
        self.union_and_write(name, parser::parse_lines(&text), create_if_missing)
            .await
    }

    async fn append_items(
        &self,
        name: &ListName,
        items: &[String],
        create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;
        self.union_and_write(name, parser::parse_items(items), create_if_missing)
            .await
    }

    async fn replace_from_url(&self, name: &ListName, url: &str) -> Result<usize, DomainError> {
        let _guard = self.write_lock.lock().await;
        let text = self.fetch(url).await?;

        // Deduplicate within the fetch only, preserving source order.
        let mut seen: HashSet<Rule> = HashSet::new();
        let rules: Vec<Rule> = parser::parse_lines(&text)
            .into_iter()
            .filter(|r| seen.insert(r.clone()))
            .collect();

        self.write_rules(&self.list_path(name), rules.iter()).await?;
        self.reload_locked()?;
        Ok(rules.len())
    }

    async fn remove_domain(&self, name: &ListName, domain: &str) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        let target = Rule::normalize(domain)
            .ok_or_else(|| DomainError::MalformedInput("missing domain".to_string()))?;

        let path = self.list_path(name);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(DomainError::ListNotFound(name.to_string()));
        }

        let rules = self.read_rules(&path).await?;
        let remaining: Vec<Rule> = rules.iter().filter(|r| **r != target).cloned().collect();
        if remaining.len() == rules.len() {
            return Ok(false);
        }

        self.write_rules(&path, remaining.iter()).await?;
        self.reload_locked()?;
        Ok(true)
    }

    async fn delete_list(&self, name: &ListName) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        let path = self.list_path(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DomainError::ListNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
        self.reload_locked()
    }

    async fn preview_from_url(&self, url: &str) -> Result<Vec<String>, DomainError> {
        let text = self.fetch(url).await?;
        Ok(parser::parse_lines(&text)
            .into_iter()
            .map(|r| r.as_str().to_string())
            .collect())
    }

    fn list_domains(
        &self,
        name: &ListName,
        offset: usize,
        limit: usize,
        query: &str,
    ) -> Result<(usize, Vec<String>), DomainError> {
        let catalog = self.catalog.load();
        let list = catalog
            .get(name.as_str())
            .ok_or_else(|| DomainError::ListNotFound(name.to_string()))?;

        let needle = query.trim().to_ascii_lowercase();
        let filtered: Vec<&Rule> = list
            .rules
            .iter()
            .filter(|r| needle.is_empty() || r.as_str().contains(&needle))
            .collect();

        let total = filtered.len();
        let page = filtered
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|r| r.as_str().to_string())
            .collect();
        Ok((total, page))
    }

    fn list_counts(&self) -> Vec<(String, usize)> {
        self.catalog.load().counts()
    }

    fn matches_any(&self, domain: &str) -> bool {
        self.catalog.load().matches_any(domain)
    }

    fn matches_lists(&self, domain: &str, lists: &[String]) -> bool {
        self.catalog.load().matches_lists(domain, lists)
    }
}
