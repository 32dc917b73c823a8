use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Capacity of the in-memory recent-query ring.
    #[serde(default = "default_recent_cap")]
    pub recent_cap: usize,
}

fn default_recent_cap() -> usize {
    500
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            recent_cap: default_recent_cap(),
        }
    }
}
