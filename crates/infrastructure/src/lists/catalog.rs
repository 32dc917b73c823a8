use super::pattern::RuleSet;
use std::collections::HashMap;
use warden_dns_domain::Rule;

/// One list as loaded from disk: rules in file order plus its own matcher,
/// so per-device filtering can consult exactly the lists a device enabled.
pub struct CompiledList {
    pub rules: Vec<Rule>,
    pub index: RuleSet,
}

impl CompiledList {
    pub fn new(rules: Vec<Rule>) -> Self {
        let index = RuleSet::build(rules.iter());
        Self { rules, index }
    }
}

/// Immutable snapshot of the whole list store. Readers hold an `Arc` to one
/// of these; the store swaps in a replacement after every successful edit or
/// reload.
#[derive(Default)]
pub struct ListCatalog {
    lists: HashMap<String, CompiledList>,
}

impl ListCatalog {
    pub fn new(lists: HashMap<String, CompiledList>) -> Self {
        Self { lists }
    }

    pub fn get(&self, name: &str) -> Option<&CompiledList> {
        self.lists.get(name)
    }

    pub fn counts(&self) -> Vec<(String, usize)> {
        self.lists
            .iter()
            .map(|(name, list)| (name.clone(), list.rules.len()))
            .collect()
    }

    /// Union match over every list.
    pub fn matches_any(&self, domain: &str) -> bool {
        self.lists.values().any(|list| list.index.matches(domain))
    }

    /// Match restricted to the named lists; unknown names are skipped.
    pub fn matches_lists(&self, domain: &str, names: &[String]) -> bool {
        names
            .iter()
            .filter_map(|name| self.lists.get(name))
            .any(|list| list.index.matches(domain))
    }
}
