use super::{BlockRule, Blocklist, RuleKind};

fn rule(kind: RuleKind, value: &str) -> BlockRule {
	BlockRule {
		id: "r1".into(),
		kind,
		value: value.into(),
		enabled: true,
	}
}

#[test]
fn exact_rule_matches_full_url_only() {
	let list = Blocklist::new(vec![rule(RuleKind::Exact, "https://example.com/app")]).unwrap();
	assert!(list.is_blocked("https://example.com/app"));
	assert!(!list.is_blocked("https://example.com/app/sub"));
}

#[test]
fn prefix_rule_matches_descendant_urls() {
	let list = Blocklist::new(vec![rule(RuleKind::Prefix, "https://example.com/app")]).unwrap();
	assert!(list.is_blocked("https://example.com/app"));
	assert!(list.is_blocked("https://example.com/app/sub?q=1"));
	assert!(!list.is_blocked("https://example.com/other"));
}

#[test]
fn domain_rule_matches_host_and_subdomains() {
	let list = Blocklist::new(vec![rule(RuleKind::Domain, "example.com")]).unwrap();
	assert!(list.is_blocked("https://example.com/anything"));
	assert!(list.is_blocked("https://mail.example.com/inbox"));
	assert!(!list.is_blocked("https://notexample.com/"));
	assert!(!list.is_blocked("not a url"));
}

#[test]
fn regexp_rule_matches_pattern() {
	let list = Blocklist::new(vec![rule(RuleKind::Regexp, r"^https://docs\..*/edit")]).unwrap();
	assert!(list.is_blocked("https://docs.example.com/d/1/edit"));
	assert!(!list.is_blocked("https://docs.example.com/d/1/view"));
}

#[test]
fn disabled_rules_are_skipped() {
	let mut disabled = rule(RuleKind::Domain, "example.com");
	disabled.enabled = false;
	let list = Blocklist::new(vec![disabled]).unwrap();
	assert!(!list.is_blocked("https://example.com/"));
}

#[test]
fn invalid_regexp_is_rejected_at_load() {
	let err = Blocklist::new(vec![rule(RuleKind::Regexp, "(unclosed")]).unwrap_err();
	assert!(err.to_string().contains("(unclosed"));
}
