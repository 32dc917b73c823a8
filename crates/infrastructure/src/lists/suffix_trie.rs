use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            terminal: false,
        }
    }
}

/// Label-reversed trie over the suffixes of `*.suffix` rules.
///
/// A lookup matches only proper subdomains: `*.example.com` covers
/// `a.example.com` but never the apex `example.com` itself.
#[derive(Default)]
pub struct SuffixTrie {
    root: TrieNode,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// `suffix` is the rule with its `*.` prefix already stripped.
    pub fn insert(&mut self, suffix: &str) {
        let mut node = &mut self.root;
        for label in suffix.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        node.terminal = true;
    }

    #[inline]
    pub fn lookup(&self, domain: &str) -> bool {
        let labels: SmallVec<[&str; 8]> = domain.split('.').rev().collect();
        let n = labels.len();
        let mut node = &self.root;

        for (i, label) in labels.iter().enumerate() {
            match node.children.get(*label) {
                Some(child) => {
                    if child.terminal && i + 1 < n {
                        return true;
                    }
                    node = child;
                }
                None => break,
            }
        }

        false
    }
}
