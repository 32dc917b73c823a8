use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Response shape for a query whose name matches an enabled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockingMode {
    /// Synthesize an A record pointing at the block page.
    #[default]
    Redirect,
    /// Synthesize an A record for 0.0.0.0 with TTL 0.
    Null,
    /// Answer RCODE 3 with no records.
    Nxdomain,
}

/// What to do for clients with no IP→device binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownDevicePolicy {
    /// Block nothing; avoids one device's lists leaking onto another.
    #[default]
    Allow,
    /// Match against the union of every loaded list.
    Global,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BlockingConfig {
    #[serde(default)]
    pub mode: BlockingMode,

    /// A-record target in redirect mode. Auto-detected at startup when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_page_ip: Option<Ipv4Addr>,

    #[serde(default)]
    pub unknown_device_policy: UnknownDevicePolicy,
}

/// The resolved runtime blocking settings. The control plane swaps a fresh
/// plan in atomically; the DNS handler reads it once per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BlockingPlan {
    pub mode: BlockingMode,
    pub block_page_ip: Ipv4Addr,
}
