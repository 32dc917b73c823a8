use serde::{Deserialize, Serialize};

use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::lists::ListsConfig;
use super::logging::LoggingConfig;
use super::policy::PolicyConfig;
use super::server::ServerConfig;
use super::telemetry::TelemetryConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for warden-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Bind addresses for the DNS and control-plane servers
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream forwarding
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Blocked-response shape and unknown-device policy
    #[serde(default)]
    pub blocking: BlockingConfig,

    /// List directory and fetch limits
    #[serde(default)]
    pub lists: ListsConfig,

    /// Query counters and recent ring
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Device policy store and binding lifetime
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. warden-dns.toml in current directory
    /// 3. /etc/warden-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("warden-dns.toml").exists() {
            Self::from_file("warden-dns.toml")?
        } else if std::path::Path::new("/etc/warden-dns/config.toml").exists() {
            Self::from_file("/etc/warden-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.dns_bind {
            self.server.dns_bind = bind;
        }
        if let Some(bind) = overrides.http_bind {
            self.server.http_bind = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.server = upstream;
        }
        if let Some(dir) = overrides.list_dir {
            self.lists.directory = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server
            .dns_bind
            .parse::<std::net::SocketAddr>()
            .map_err(|_| {
                ConfigError::Validation(format!("Bad DNS bind address: {}", self.server.dns_bind))
            })?;
        self.server
            .http_bind
            .parse::<std::net::SocketAddr>()
            .map_err(|_| {
                ConfigError::Validation(format!("Bad HTTP bind address: {}", self.server.http_bind))
            })?;
        self.upstream
            .server
            .parse::<std::net::SocketAddr>()
            .map_err(|_| {
                ConfigError::Validation(format!("Bad upstream address: {}", self.upstream.server))
            })?;

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }
        if self.telemetry.recent_cap == 0 {
            return Err(ConfigError::Validation(
                "Recent-query ring capacity cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_bind: Option<String>,
    pub http_bind: Option<String>,
    pub upstream: Option<String>,
    pub list_dir: Option<String>,
    pub log_level: Option<String>,
}
