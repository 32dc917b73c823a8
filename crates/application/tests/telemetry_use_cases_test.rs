use std::sync::Arc;
use warden_dns_application::ports::TelemetrySink;
use warden_dns_application::use_cases::{
    ClearLogsUseCase, GetAnalyticsUseCase, GetRecentQueriesUseCase,
};
use warden_dns_domain::QueryRecord;

mod helpers;
use helpers::MockTelemetry;

#[tokio::test]
async fn test_analytics_counts_blocked_and_allowed() {
    let sink = Arc::new(MockTelemetry::new());
    sink.record(QueryRecord::new("ads.example.com", "10.0.0.1", true));
    sink.record(QueryRecord::new("example.com", "10.0.0.1", false));
    sink.record(QueryRecord::new("ads.example.com", "10.0.0.2", true));

    let snapshot = GetAnalyticsUseCase::new(sink).execute();
    assert_eq!(snapshot.queries_total, 3);
    assert_eq!(snapshot.blocked_total, 2);
    assert_eq!(snapshot.per_domain_hits.get("ads.example.com"), Some(&2));
    assert_eq!(snapshot.per_allowed_domain_hits.get("example.com"), Some(&1));
    assert_eq!(snapshot.per_client_hits.get("10.0.0.1"), Some(&2));
}

#[tokio::test]
async fn test_recent_respects_limit_and_order() {
    let sink = Arc::new(MockTelemetry::new());
    for i in 0..5 {
        sink.record(QueryRecord::new(format!("d{i}.com"), "10.0.0.1", false));
    }

    let recent = GetRecentQueriesUseCase::new(sink).execute(2);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].domain, "d3.com");
    assert_eq!(recent[1].domain, "d4.com");
}

#[tokio::test]
async fn test_clear_empties_the_ring() {
    let sink = Arc::new(MockTelemetry::new());
    sink.record(QueryRecord::new("a.com", "10.0.0.1", false));

    ClearLogsUseCase::new(sink.clone()).execute().await.unwrap();
    assert!(sink.records().is_empty());
}
