use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// SQLite database of the external auth store; when unset the resolver
    /// runs with no per-device policy (single-user deployment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// IP→device bindings older than this are dropped by the sweep job.
    #[serde(default = "default_binding_ttl_secs")]
    pub binding_ttl_secs: u64,
}

fn default_binding_ttl_secs() -> u64 {
    24 * 60 * 60
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            database: None,
            binding_ttl_secs: default_binding_ttl_secs(),
        }
    }
}
