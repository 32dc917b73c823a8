mod sink;

pub use sink::QueryTelemetry;
