use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One resolved query, as kept in the recent ring and appended to the
/// JSON-lines log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub time: DateTime<Utc>,
    pub domain: String,
    pub client: String,
    pub blocked: bool,
}

impl QueryRecord {
    pub fn new(domain: impl Into<String>, client: impl Into<String>, blocked: bool) -> Self {
        Self {
            time: Utc::now(),
            domain: domain.into(),
            client: client.into(),
            blocked,
        }
    }
}

/// Monotonic counters exposed by the analytics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub queries_total: u64,
    pub blocked_total: u64,
    pub per_domain_hits: HashMap<String, u64>,
    pub per_client_hits: HashMap<String, u64>,
    pub per_allowed_domain_hits: HashMap<String, u64>,
}
