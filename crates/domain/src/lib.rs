pub mod config;
pub mod errors;
pub mod list;
pub mod query_record;
pub mod rule;

pub use config::{
    BlockingConfig, BlockingMode, BlockingPlan, CliOverrides, Config, ConfigError, ListsConfig,
    LoggingConfig, PolicyConfig, ServerConfig, TelemetryConfig, UnknownDevicePolicy,
    UpstreamConfig,
};
pub use errors::DomainError;
pub use list::ListName;
pub use query_record::{AnalyticsSnapshot, QueryRecord};
pub use rule::{normalize_domain, Rule};
