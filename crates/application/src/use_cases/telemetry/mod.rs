pub mod clear_logs;
pub mod get_analytics;
pub mod get_recent_queries;

pub use clear_logs::ClearLogsUseCase;
pub use get_analytics::GetAnalyticsUseCase;
pub use get_recent_queries::GetRecentQueriesUseCase;
