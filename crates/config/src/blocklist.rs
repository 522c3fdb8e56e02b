use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// How a blocklist rule's value is matched against the document URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
	/// Full-URL equality.
	Exact,
	/// URL starts with the value.
	Prefix,
	/// Host equals the value or is a subdomain of it.
	Domain,
	/// Value is a regular expression over the full URL.
	Regexp,
}

/// One stored blocklist rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRule {
	/// Stable identifier assigned by the settings UI.
	pub id: String,
	#[serde(rename = "type")]
	pub kind: RuleKind,
	pub value: String,
	pub enabled: bool,
}

#[derive(Debug, Clone)]
struct CompiledRule {
	rule: BlockRule,
	regex: Option<Regex>,
}

/// Ordered set of site-disable rules with pre-compiled regexps.
///
/// Invalid regexp rules are rejected at load time, never during dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<BlockRule>", into = "Vec<BlockRule>")]
pub struct Blocklist {
	rules: Vec<CompiledRule>,
}

impl Blocklist {
	/// Compiles a rule set.
	pub fn new(rules: Vec<BlockRule>) -> Result<Self, ConfigError> {
		let rules = rules
			.into_iter()
			.map(|rule| {
				let regex = match rule.kind {
					RuleKind::Regexp => Some(Regex::new(&rule.value).map_err(|source| ConfigError::InvalidPattern {
						pattern: rule.value.clone(),
						source,
					})?),
					_ => None,
				};
				Ok(CompiledRule { rule, regex })
			})
			.collect::<Result<Vec<_>, ConfigError>>()?;
		Ok(Self { rules })
	}

	/// Returns true if any enabled rule matches `url`.
	pub fn is_blocked(&self, url: &str) -> bool {
		self.rules.iter().filter(|compiled| compiled.rule.enabled).any(|compiled| compiled.matches(url))
	}

	/// Number of rules, enabled or not.
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Returns true if no rules are stored.
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

impl CompiledRule {
	fn matches(&self, url: &str) -> bool {
		match self.rule.kind {
			RuleKind::Exact => url == self.rule.value,
			RuleKind::Prefix => url.starts_with(&self.rule.value),
			RuleKind::Domain => host_matches(url, &self.rule.value),
			RuleKind::Regexp => self.regex.as_ref().is_some_and(|regex| regex.is_match(url)),
		}
	}
}

fn host_matches(url: &str, domain: &str) -> bool {
	let Ok(parsed) = Url::parse(url) else {
		return false;
	};
	let Some(host) = parsed.host_str() else {
		return false;
	};
	host == domain || host.strip_suffix(domain).is_some_and(|rest| rest.ends_with('.'))
}

impl TryFrom<Vec<BlockRule>> for Blocklist {
	type Error = ConfigError;

	fn try_from(rules: Vec<BlockRule>) -> Result<Self, ConfigError> {
		Self::new(rules)
	}
}

impl From<Blocklist> for Vec<BlockRule> {
	fn from(blocklist: Blocklist) -> Self {
		blocklist.rules.into_iter().map(|compiled| compiled.rule).collect()
	}
}

#[cfg(test)]
mod tests;
