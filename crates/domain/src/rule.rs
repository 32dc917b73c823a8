use crate::errors::DomainError;
use std::net::IpAddr;

/// A normalized blocklist pattern: lowercase, no trailing dot, optionally
/// containing `*` wildcards that match any run of characters including dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(String);

impl Rule {
    /// Normalize a raw line into a rule, or `None` when the line carries no
    /// pattern (blank, comment-only).
    pub fn normalize(raw: &str) -> Option<Rule> {
        let p = raw.trim().trim_end_matches('.').to_ascii_lowercase();
        if p.is_empty() || p.starts_with('#') {
            return None;
        }
        Some(Rule(p))
    }

    /// Normalize and reject patterns that are never valid block targets:
    /// bare IP literals and the reserved hosts-file names.
    pub fn parse(raw: &str) -> Result<Rule, DomainError> {
        let rule =
            Rule::normalize(raw).ok_or_else(|| DomainError::InvalidRule(raw.trim().to_string()))?;
        if rule.is_ip_literal() || rule.is_reserved_local_name() {
            return Err(DomainError::InvalidRule(rule.0));
        }
        Ok(rule)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_wildcard(&self) -> bool {
        self.0.contains('*')
    }

    /// `*.suffix` with no further wildcards: the shape a suffix trie can index.
    pub fn as_subdomain_wildcard(&self) -> Option<&str> {
        let suffix = self.0.strip_prefix("*.")?;
        if suffix.is_empty() || suffix.contains('*') {
            return None;
        }
        Some(suffix)
    }

    pub fn is_ip_literal(&self) -> bool {
        self.0.parse::<IpAddr>().is_ok()
    }

    /// Names that hosts files map to loopback or IPv6 multicast; never block
    /// targets.
    pub fn is_reserved_local_name(&self) -> bool {
        matches!(
            self.0.as_str(),
            "localhost" | "local" | "broadcasthost" | "ip6-localhost" | "ip6-loopback"
        ) || self.0.starts_with("ip6-")
            || self.0.starts_with("ff")
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a queried domain name the way rules are normalized, so the two
/// sides of a match always compare equal forms.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}
