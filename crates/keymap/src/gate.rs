use rustc_hash::FxHashSet;

use crate::table::ActionTable;

/// Strips leading modifier prefixes (`C-`, `S-`, `A-`, `M-`) from a token.
///
/// A bare `-` key renders as the token `"-"` and is left alone.
pub fn strip_modifiers(token: &str) -> &str {
	let mut rest = token;
	loop {
		let stripped = ["C-", "S-", "A-", "M-"]
			.iter()
			.find_map(|prefix| rest.strip_prefix(prefix).filter(|r| !r.is_empty()));
		match stripped {
			Some(r) => rest = r,
			None => return rest,
		}
	}
}

/// Pre-computed set of key tokens that can begin or continue any chord of a
/// table.
///
/// Dispatch consults the gate before feeding a keystroke to the resolver:
/// keys that appear in no chord fall through untouched so the host page (or
/// a registered listener) can handle them. Non-normal modes build their gate
/// with modifiers stripped, so a shifted motion key is still considered
/// relevant to the mode.
#[derive(Debug, Clone)]
pub struct TokenGate {
	tokens: FxHashSet<String>,
	strip: bool,
}

impl TokenGate {
	/// Collects every constituent token of every chord in `table`.
	pub fn for_table<A>(table: &ActionTable<A>, strip: bool) -> Self {
		let mut tokens = FxHashSet::default();
		for (chord, _) in table.iter() {
			for token in chord.split_whitespace() {
				let token = if strip { strip_modifiers(token) } else { token };
				tokens.insert(token.to_string());
			}
		}
		Self { tokens, strip }
	}

	/// Returns true if the token is relevant to the gated table.
	pub fn admits(&self, token: &str) -> bool {
		let token = if self.strip { strip_modifiers(token) } else { token };
		self.tokens.contains(token)
	}
}
