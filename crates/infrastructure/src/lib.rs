pub mod bindings;
pub mod dns;
pub mod lists;
pub mod policy;
pub mod telemetry;

pub use bindings::ClientBindings;
pub use dns::{detect_local_ipv4, QueryHandler, UdpForwarder};
pub use lists::FileListStore;
pub use policy::{SqliteDevicePolicy, StaticDevicePolicy};
pub use telemetry::QueryTelemetry;
