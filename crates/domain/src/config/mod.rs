pub mod blocking;
pub mod errors;
pub mod lists;
pub mod logging;
pub mod policy;
pub mod root;
pub mod server;
pub mod telemetry;
pub mod upstream;

pub use blocking::{BlockingConfig, BlockingMode, BlockingPlan, UnknownDevicePolicy};
pub use errors::ConfigError;
pub use lists::ListsConfig;
pub use logging::LoggingConfig;
pub use policy::PolicyConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;
pub use upstream::UpstreamConfig;
