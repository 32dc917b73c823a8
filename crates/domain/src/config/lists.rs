use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListsConfig {
    /// Directory holding one `<name>.txt` file per list. Owned exclusively by
    /// the list store.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Upper bound on a fetched list body; fetches past this fail without
    /// touching the list.
    #[serde(default = "default_max_fetch_bytes")]
    pub max_fetch_bytes: usize,

    /// When set, reload the directory on this cadence to pick up edits made
    /// outside the control plane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resync_interval_secs: Option<u64>,
}

fn default_directory() -> String {
    "./blocklist".to_string()
}

fn default_max_fetch_bytes() -> usize {
    8 * 1024 * 1024
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            max_fetch_bytes: default_max_fetch_bytes(),
            resync_interval_secs: None,
        }
    }
}
