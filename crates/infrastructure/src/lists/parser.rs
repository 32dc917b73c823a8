use warden_dns_domain::Rule;

/// Parse list-file text into rules, in file order.
///
/// Accepts plain rule-per-line files and hosts syntax (`IP hostname…`).
/// Inline `#` comments are stripped; blank lines, comment lines, bare IPs and
/// the reserved loopback/multicast hostnames are skipped.
pub fn parse_lines(text: &str) -> Vec<Rule> {
    let mut rules = Vec::new();
    for raw_line in text.lines() {
        let line = match raw_line.find('#') {
            Some(idx) => &raw_line[..idx],
            None => raw_line,
        };
        let mut fields = line.split_whitespace().peekable();

        // Hosts-style line: a leading IP followed by one or more hostnames.
        if let Some(first) = fields.peek() {
            if first.parse::<std::net::IpAddr>().is_ok() {
                fields.next();
                if fields.peek().is_none() {
                    continue;
                }
            }
        }

        for field in fields {
            if let Ok(rule) = Rule::parse(field) {
                rules.push(rule);
            }
        }
    }
    rules
}

/// Split free-form item strings on commas, whitespace and newlines, keeping
/// whatever normalizes into a valid rule.
pub fn parse_items(items: &[String]) -> Vec<Rule> {
    items
        .iter()
        .flat_map(|item| item.split([',', ' ', '\n', '\r', '\t']))
        .filter_map(|piece| Rule::parse(piece).ok())
        .collect()
}
