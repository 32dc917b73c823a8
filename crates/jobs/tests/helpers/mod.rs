#![allow(dead_code)]

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use warden_dns_application::ports::{ClientBindingsPort, ListStorePort};
use warden_dns_domain::{DomainError, ListName};

/// Counts sweep invocations; always reports one dropped binding.
#[derive(Default)]
pub struct CountingBindings {
    pub sweeps: AtomicUsize,
}

impl ClientBindingsPort for CountingBindings {
    fn bind(&self, _ip: IpAddr, _device_id: &str) {}

    fn lookup(&self, _ip: IpAddr) -> Option<String> {
        None
    }

    fn unbind(&self, _ip: IpAddr) -> bool {
        false
    }

    fn sweep_expired(&self, _max_age_secs: u64) -> usize {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        1
    }
}

/// Counts reloads; every other operation is unreachable from the jobs.
#[derive(Default)]
pub struct CountingListStore {
    pub reloads: AtomicUsize,
}

#[async_trait]
impl ListStorePort for CountingListStore {
    async fn load_all(&self) -> Result<(), DomainError> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn append_from_url(
        &self,
        _name: &ListName,
        _url: &str,
        _create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        Ok(0)
    }

    async fn append_items(
        &self,
        _name: &ListName,
        _items: &[String],
        _create_if_missing: bool,
    ) -> Result<usize, DomainError> {
        Ok(0)
    }

    async fn replace_from_url(&self, _name: &ListName, _url: &str) -> Result<usize, DomainError> {
        Ok(0)
    }

    async fn remove_domain(&self, _name: &ListName, _domain: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn delete_list(&self, _name: &ListName) -> Result<(), DomainError> {
        Ok(())
    }

    async fn preview_from_url(&self, _url: &str) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }

    fn list_domains(
        &self,
        _name: &ListName,
        _offset: usize,
        _limit: usize,
        _query: &str,
    ) -> Result<(usize, Vec<String>), DomainError> {
        Ok((0, Vec::new()))
    }

    fn list_counts(&self) -> Vec<(String, usize)> {
        Vec::new()
    }

    fn matches_any(&self, _domain: &str) -> bool {
        false
    }

    fn matches_lists(&self, _domain: &str, _lists: &[String]) -> bool {
        false
    }
}
