pub mod client_bindings;
pub mod device_policy;
pub mod list_store;
pub mod telemetry;

pub use client_bindings::ClientBindingsPort;
pub use device_policy::DevicePolicyPort;
pub use list_store::ListStorePort;
pub use telemetry::TelemetrySink;
