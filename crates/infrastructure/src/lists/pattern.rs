use super::suffix_trie::SuffixTrie;
use compact_str::CompactString;
use fancy_regex::Regex;
use rustc_hash::FxBuildHasher;
use std::collections::HashSet;
use tracing::warn;
use warden_dns_domain::Rule;

/// Compiled form of a rule set with a whole-string wildcard `matches`.
///
/// Rules are split into three tiers at build time:
///   - literals into a hash set
///   - `*.suffix` rules into a label-reversed suffix trie
///   - every other wildcard shape into an anchored regex
///
/// The tiers together are observationally equivalent to matching each rule as
/// an anchored regex with `*` rewritten to `.*`.
pub struct RuleSet {
    exact: HashSet<CompactString, FxBuildHasher>,
    wildcard: SuffixTrie,
    patterns: Vec<Regex>,
    dropped: usize,
}

impl RuleSet {
    pub fn build<'a, I>(rules: I) -> RuleSet
    where
        I: IntoIterator<Item = &'a Rule>,
    {
        let mut exact = HashSet::with_hasher(FxBuildHasher);
        let mut wildcard = SuffixTrie::new();
        let mut patterns: Vec<Regex> = Vec::new();
        let mut seen_patterns: HashSet<String, FxBuildHasher> = HashSet::with_hasher(FxBuildHasher);
        let mut dropped = 0usize;

        for rule in rules {
            if !rule.has_wildcard() {
                exact.insert(CompactString::new(rule.as_str()));
            } else if let Some(suffix) = rule.as_subdomain_wildcard() {
                wildcard.insert(suffix);
            } else if seen_patterns.insert(rule.as_str().to_string()) {
                match compile_wildcard(rule.as_str()) {
                    Ok(re) => patterns.push(re),
                    Err(e) => {
                        warn!(rule = %rule, error = %e, "Failed to compile wildcard rule");
                        dropped += 1;
                    }
                }
            }
        }

        RuleSet {
            exact,
            wildcard,
            patterns,
            dropped,
        }
    }

    /// `domain` must already be normalized (lowercase, no trailing dot).
    #[inline]
    pub fn matches(&self, domain: &str) -> bool {
        if self.exact.contains(domain) {
            return true;
        }
        if self.wildcard.lookup(domain) {
            return true;
        }
        self.patterns
            .iter()
            .any(|re| re.is_match(domain).unwrap_or(false))
    }

    /// Rules that failed to compile. Test hook.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// `*` spans any run of characters including dots; everything else is
/// literal, and the match is anchored at both ends.
fn compile_wildcard(rule: &str) -> Result<Regex, fancy_regex::Error> {
    let escaped = fancy_regex::escape(rule).replace("\\*", ".*");
    Regex::new(&format!("^{escaped}$"))
}
