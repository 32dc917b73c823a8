use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Recursive resolver that receives every non-blocked query.
    #[serde(default = "default_server")]
    pub server: String,

    /// Forwarding deadline, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_server() -> String {
    "1.1.1.1:53".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
