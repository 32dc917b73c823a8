use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tracing::error;
use warden_dns_application::ports::TelemetrySink;
use warden_dns_domain::{AnalyticsSnapshot, DomainError, QueryRecord};

enum LogCommand {
    Append(QueryRecord),
    Truncate(oneshot::Sender<Result<(), DomainError>>),
}

/// Counters, the recent-query ring and the JSONL appender.
///
/// `record` runs on the packet path: counter and ring updates take short
/// mutexes and the durable append is handed to a writer task. The log is
/// best-effort (open, append, close per record; failures logged and dropped),
/// not a crash-consistent journal.
pub struct QueryTelemetry {
    counters: Mutex<AnalyticsSnapshot>,
    recent: Mutex<VecDeque<QueryRecord>>,
    recent_cap: usize,
    log_tx: mpsc::UnboundedSender<LogCommand>,
}

impl QueryTelemetry {
    pub fn new(log_path: impl Into<PathBuf>, recent_cap: usize) -> Self {
        let (log_tx, log_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_log_writer(log_path.into(), log_rx));

        Self {
            counters: Mutex::new(AnalyticsSnapshot::default()),
            recent: Mutex::new(VecDeque::with_capacity(recent_cap)),
            recent_cap,
            log_tx,
        }
    }
}

#[async_trait]
impl TelemetrySink for QueryTelemetry {
    fn record(&self, record: QueryRecord) {
        {
            let mut counters = self.counters.lock().unwrap();
            counters.queries_total += 1;
            if record.blocked {
                counters.blocked_total += 1;
                *counters
                    .per_domain_hits
                    .entry(record.domain.clone())
                    .or_default() += 1;
            } else {
                *counters
                    .per_allowed_domain_hits
                    .entry(record.domain.clone())
                    .or_default() += 1;
            }
            if !record.client.is_empty() {
                *counters
                    .per_client_hits
                    .entry(record.client.clone())
                    .or_default() += 1;
            }
        }

        {
            let mut recent = self.recent.lock().unwrap();
            if recent.len() == self.recent_cap {
                recent.pop_front();
            }
            recent.push_back(record.clone());
        }

        // Writer gone means shutdown; nothing useful left to do with the record.
        let _ = self.log_tx.send(LogCommand::Append(record));
    }

    fn analytics(&self) -> AnalyticsSnapshot {
        self.counters.lock().unwrap().clone()
    }

    fn recent(&self, limit: usize) -> Vec<QueryRecord> {
        let recent = self.recent.lock().unwrap();
        let limit = if limit == 0 || limit > recent.len() {
            recent.len()
        } else {
            limit
        };
        recent.iter().skip(recent.len() - limit).cloned().collect()
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.log_tx
            .send(LogCommand::Truncate(ack_tx))
            .map_err(|_| DomainError::Io("log writer stopped".to_string()))?;
        ack_rx
            .await
            .map_err(|_| DomainError::Io("log writer stopped".to_string()))??;

        self.recent.lock().unwrap().clear();
        Ok(())
    }
}

async fn run_log_writer(path: PathBuf, mut rx: mpsc::UnboundedReceiver<LogCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            LogCommand::Append(record) => {
                if let Err(e) = append_line(&path, &record).await {
                    error!(path = %path.display(), error = %e, "Query log append failed");
                }
            }
            LogCommand::Truncate(ack) => {
                let result = tokio::fs::write(&path, b"").await.map_err(DomainError::from);
                let _ = ack.send(result);
            }
        }
    }
}

async fn append_line(path: &PathBuf, record: &QueryRecord) -> Result<(), DomainError> {
    let mut line =
        serde_json::to_string(record).map_err(|e| DomainError::Io(e.to_string()))?;
    line.push('\n');

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    Ok(())
}
