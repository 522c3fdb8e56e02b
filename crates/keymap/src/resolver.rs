use crate::table::{ActionTable, Binding};

/// Result of feeding one token to the resolver.
#[derive(Debug)]
pub enum Outcome<'a, A> {
	/// More than one chord still matches; more input expected.
	Pending,
	/// Exactly one chord matched the buffer exactly. Buffer cleared.
	Resolved(&'a Binding<A>),
	/// No chord matches the buffer. Buffer cleared; the input is silently
	/// discarded.
	NoMatch,
}

/// Accumulates key tokens and resolves them against an action table.
///
/// Tokens are joined with single spaces so the buffer is directly comparable
/// to the table's chord strings.
#[derive(Debug, Clone, Default)]
pub struct ChordResolver {
	buffer: String,
	tokens: usize,
}

impl ChordResolver {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `token` and resolves the buffer against `table`.
	pub fn feed<'a, A>(&mut self, table: &'a ActionTable<A>, token: &str) -> Outcome<'a, A> {
		if !self.buffer.is_empty() {
			self.buffer.push(' ');
		}
		self.buffer.push_str(token);
		self.tokens += 1;

		// `decision`: None => no match; Some(Some(binding)) => exact unique match;
		// Some(None) => still pending. Computed in a scope so the borrow the
		// iterator holds on `self.buffer` is released before `self.clear()`.
		let decision = {
			let mut matches = table.chords_with_prefix(&self.buffer);
			match matches.next() {
				None => None,
				Some(first) => {
					if matches.next().is_none() && first == self.buffer {
						Some(table.get(first))
					} else {
						Some(None)
					}
				}
			}
		};

		match decision {
			None => {
				self.clear();
				Outcome::NoMatch
			}
			Some(Some(binding)) => {
				self.clear();
				Outcome::Resolved(binding)
			}
			Some(None) => Outcome::Pending,
		}
	}

	/// Chords still matching the buffer, for suggestion surfaces.
	pub fn pending_matches<'a, A>(&'a self, table: &'a ActionTable<A>) -> Vec<&'a str> {
		table.chords_with_prefix(&self.buffer).collect()
	}

	/// The accumulated chord buffer.
	pub fn buffer(&self) -> &str {
		&self.buffer
	}

	/// Number of tokens accumulated so far.
	pub fn token_count(&self) -> usize {
		self.tokens
	}

	/// Returns true when no chord is in progress.
	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	/// Discards any in-progress chord.
	pub fn clear(&mut self) {
		self.buffer.clear();
		self.tokens = 0;
	}
}
