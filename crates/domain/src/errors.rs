use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Invalid list name: {0}")]
    InvalidListName(String),

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Domain not present in list: {0}")]
    DomainNotInList(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Fetch rejected for {url}: HTTP {status}")]
    FetchRejected { url: String, status: u16 },

    #[error("Fetch body exceeded {limit} bytes for {url}")]
    FetchTooLarge { url: String, limit: usize },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Policy store error: {0}")]
    PolicyStore(String),

    #[error("Upstream query timeout")]
    QueryTimeout,

    #[error("Upstream protocol error: {0}")]
    UpstreamProtocol(String),

    #[error("Guests may not modify state")]
    GuestForbidden,
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}
