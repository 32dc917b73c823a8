use async_trait::async_trait;
use warden_dns_domain::{AnalyticsSnapshot, DomainError, QueryRecord};

/// Query counters, the bounded recent ring and the durable JSONL log.
#[async_trait]
pub trait TelemetrySink: Send + Sync {
    /// Record one resolved query. Called exactly once per query, after the
    /// reply is sent; must not block the packet path.
    fn record(&self, record: QueryRecord);

    fn analytics(&self) -> AnalyticsSnapshot;

    /// Up to `limit` most recent records, oldest first.
    fn recent(&self, limit: usize) -> Vec<QueryRecord>;

    /// Truncate the durable log and empty the ring.
    async fn clear(&self) -> Result<(), DomainError>;
}
