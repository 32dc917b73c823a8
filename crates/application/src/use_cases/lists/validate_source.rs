use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::DomainError;

const SAMPLE_SIZE: usize = 10;

pub struct ValidateSourceUseCase {
    lists: Arc<dyn ListStorePort>,
}

pub struct SourcePreview {
    pub count: usize,
    pub sample: Vec<String>,
}

impl ValidateSourceUseCase {
    pub fn new(lists: Arc<dyn ListStorePort>) -> Self {
        Self { lists }
    }

    /// Fetch and parse a candidate URL without writing anything; returns the
    /// parsed rule count and a small sample.
    pub async fn execute(&self, url: &str) -> Result<SourcePreview, DomainError> {
        if url.trim().is_empty() {
            return Err(DomainError::MalformedInput("missing url".to_string()));
        }
        let mut rules = self.lists.preview_from_url(url).await?;
        let count = rules.len();
        rules.truncate(SAMPLE_SIZE);
        Ok(SourcePreview {
            count,
            sample: rules,
        })
    }
}
