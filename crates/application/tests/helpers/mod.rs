mod mock_repositories;

pub use mock_repositories::{
    MockBindings, MockDevicePolicy, MockListStore, MockTelemetry,
};
