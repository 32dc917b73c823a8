#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::net::IpAddr;
use std::sync::Mutex;
use warden_dns_application::ports::{
    ClientBindingsPort, DevicePolicyPort, ListStorePort, TelemetrySink,
};
use warden_dns_domain::{AnalyticsSnapshot, DomainError, ListName, QueryRecord, Rule};

// ============================================================================
// Mock ListStorePort
// ============================================================================

#[derive(Default)]
pub struct MockListStore {
    lists: Mutex<BTreeMap<String, BTreeSet<String>>>,
    fetches: Mutex<HashMap<String, String>>,
    pub reload_count: Mutex<usize>,
}

impl MockListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, name: &str, rules: &[&str]) -> Self {
        {
            let mut lists = self.lists.lock().unwrap();
            lists.insert(
                name.to_string(),
                rules.iter().map(|r| r.to_string()).collect(),
            );
        }
        self
    }

    /// Canned response body for a URL, so tests never touch the network.
    pub fn with_fetch(self, url: &str, body: &str) -> Self {
        self.fetches
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
        self
    }

    pub fn rules_of(&self, name: &str) -> Vec<String> {
        self.lists
            .lock()
            .unwrap()
            .get(name)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn parse_body(&self, url: &str) -> Result<Vec<String>, DomainError> {
        let fetches = self.fetches.lock().unwrap();
        let body = fetches.get(url).ok_or_else(|| DomainError::FetchFailed {
            url: url.to_string(),
            reason: "no canned response".to_string(),
        })?;
        Ok(body
            .lines()
            .filter_map(|l| Rule::parse(l).ok())
            .map(|r| r.as_str().to_string())
            .collect())
    }

    fn union_into(
        &self,
        name: &ListName,
        rules: Vec<String>,
        create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        let mut lists = self.lists.lock().unwrap();
        if !lists.contains_key(name.as_str()) && !create_if_missing {
            return Err(DomainError::ListNotFound(name.to_string()));
        }
        let set = lists.entry(name.as_str().to_string()).or_default();
        let mut added = 0;
        for rule in rules {
            if set.insert(rule) {
                added += 1;
            }
        }
        Ok(added)
    }
}

#[async_trait]
impl ListStorePort for MockListStore {
    async fn load_all(&self) -> Result<(), DomainError> {
        *self.reload_count.lock().unwrap() += 1;
        Ok(())
    }

    async fn append_from_url(
        &self,
        name: &ListName,
        url: &str,
        create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        let rules = self.parse_body(url)?;
        self.union_into(name, rules, create_if_missing)
    }

    async fn append_items(
        &self,
        name: &ListName,
        items: &[String],
        create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        let rules = items
            .iter()
            .flat_map(|item| item.split([',', ' ', '\n', '\r', '\t']))
            .filter_map(|piece| Rule::parse(piece).ok())
            .map(|r| r.as_str().to_string())
            .collect();
        self.union_into(name, rules, create_if_missing)
    }

    async fn replace_from_url(&self, name: &ListName, url: &str) -> Result<usize, DomainError> {
        let rules = self.parse_body(url)?;
        let mut lists = self.lists.lock().unwrap();
        let set: BTreeSet<String> = rules.into_iter().collect();
        let written = set.len();
        lists.insert(name.as_str().to_string(), set);
        Ok(written)
    }

    async fn remove_domain(&self, name: &ListName, domain: &str) -> Result<bool, DomainError> {
        let normalized = Rule::normalize(domain)
            .ok_or_else(|| DomainError::MalformedInput("missing domain".to_string()))?;
        let mut lists = self.lists.lock().unwrap();
        let set = lists
            .get_mut(name.as_str())
            .ok_or_else(|| DomainError::ListNotFound(name.to_string()))?;
        Ok(set.remove(normalized.as_str()))
    }

    async fn delete_list(&self, name: &ListName) -> Result<(), DomainError> {
        let mut lists = self.lists.lock().unwrap();
        lists
            .remove(name.as_str())
            .map(|_| ())
            .ok_or_else(|| DomainError::ListNotFound(name.to_string()))
    }

    async fn preview_from_url(&self, url: &str) -> Result<Vec<String>, DomainError> {
        self.parse_body(url)
    }

    fn list_domains(
        &self,
        name: &ListName,
        offset: usize,
        limit: usize,
        query: &str,
    ) -> Result<(usize, Vec<String>), DomainError> {
        let lists = self.lists.lock().unwrap();
        let set = lists
            .get(name.as_str())
            .ok_or_else(|| DomainError::ListNotFound(name.to_string()))?;
        let needle = query.trim().to_ascii_lowercase();
        let filtered: Vec<String> = set
            .iter()
            .filter(|d| needle.is_empty() || d.contains(&needle))
            .cloned()
            .collect();
        let total = filtered.len();
        let page = filtered.into_iter().skip(offset).take(limit).collect();
        Ok((total, page))
    }

    fn list_counts(&self) -> Vec<(String, usize)> {
        self.lists
            .lock()
            .unwrap()
            .iter()
            .map(|(name, set)| (name.clone(), set.len()))
            .collect()
    }

    fn matches_any(&self, domain: &str) -> bool {
        let lists = self.lists.lock().unwrap();
        lists
            .values()
            .flatten()
            .any(|rule| wildcard_match(rule, domain))
    }

    fn matches_lists(&self, domain: &str, selected: &[String]) -> bool {
        let lists = self.lists.lock().unwrap();
        selected
            .iter()
            .filter_map(|name| lists.get(name))
            .flatten()
            .any(|rule| wildcard_match(rule, domain))
    }
}

/// Whole-string wildcard match where `*` spans any characters including dots.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p = pattern.as_bytes();
    let t = text.as_bytes();
    let (mut pi, mut ti) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut mark = 0usize;
    while ti < t.len() {
        if pi < p.len() && (p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == b'*' {
            star = Some(pi);
            mark = ti;
            pi += 1;
        } else if let Some(s) = star {
            pi = s + 1;
            mark += 1;
            ti = mark;
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == b'*' {
        pi += 1;
    }
    pi == p.len()
}

// ============================================================================
// Mock DevicePolicyPort
// ============================================================================

#[derive(Default)]
pub struct MockDevicePolicy {
    lists: Mutex<HashMap<String, Vec<String>>>,
    fail: Mutex<bool>,
}

impl MockDevicePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(self, device: &str, lists: &[&str]) -> Self {
        self.lists
            .lock()
            .unwrap()
            .insert(device.to_string(), lists.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn lists_of(&self, device: &str) -> Vec<String> {
        self.lists
            .lock()
            .unwrap()
            .get(device)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DevicePolicyPort for MockDevicePolicy {
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, DomainError> {
        if *self.fail.lock().unwrap() {
            return Err(DomainError::PolicyStore("mock failure".to_string()));
        }
        Ok(self.lists_of(device_id))
    }

    async fn enable_list(&self, device_id: &str, list: &str) -> Result<(), DomainError> {
        let mut lists = self.lists.lock().unwrap();
        let entry = lists.entry(device_id.to_string()).or_default();
        if !entry.iter().any(|l| l == list) {
            entry.push(list.to_string());
        }
        Ok(())
    }

    async fn disable_list(&self, device_id: &str, list: &str) -> Result<(), DomainError> {
        let mut lists = self.lists.lock().unwrap();
        if let Some(entry) = lists.get_mut(device_id) {
            entry.retain(|l| l != list);
        }
        Ok(())
    }
}

// ============================================================================
// Mock ClientBindingsPort
// ============================================================================

#[derive(Default)]
pub struct MockBindings {
    map: Mutex<HashMap<IpAddr, String>>,
}

impl MockBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(self, ip: &str, device: &str) -> Self {
        self.map
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), device.to_string());
        self
    }
}

impl ClientBindingsPort for MockBindings {
    fn bind(&self, ip: IpAddr, device_id: &str) {
        self.map.lock().unwrap().insert(ip, device_id.to_string());
    }

    fn lookup(&self, ip: IpAddr) -> Option<String> {
        self.map.lock().unwrap().get(&ip).cloned()
    }

    fn unbind(&self, ip: IpAddr) -> bool {
        self.map.lock().unwrap().remove(&ip).is_some()
    }

    fn sweep_expired(&self, _max_age_secs: u64) -> usize {
        0
    }
}

// ============================================================================
// Mock TelemetrySink
// ============================================================================

#[derive(Default)]
pub struct MockTelemetry {
    records: Mutex<Vec<QueryRecord>>,
}

impl MockTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<QueryRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelemetrySink for MockTelemetry {
    fn record(&self, record: QueryRecord) {
        self.records.lock().unwrap().push(record);
    }

    fn analytics(&self) -> AnalyticsSnapshot {
        let records = self.records.lock().unwrap();
        let mut snapshot = AnalyticsSnapshot {
            queries_total: records.len() as u64,
            ..Default::default()
        };
        for r in records.iter() {
            if r.blocked {
                snapshot.blocked_total += 1;
                *snapshot.per_domain_hits.entry(r.domain.clone()).or_default() += 1;
            } else {
                *snapshot
                    .per_allowed_domain_hits
                    .entry(r.domain.clone())
                    .or_default() += 1;
            }
            *snapshot.per_client_hits.entry(r.client.clone()).or_default() += 1;
        }
        snapshot
    }

    fn recent(&self, limit: usize) -> Vec<QueryRecord> {
        let records = self.records.lock().unwrap();
        let start = records.len().saturating_sub(limit);
        records[start..].to_vec()
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}
