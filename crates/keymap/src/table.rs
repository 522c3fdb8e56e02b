use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::KeymapError;

/// One chord binding: a human-readable description plus its action value.
///
/// The action type is supplied by the embedding layer (data-driven dispatch);
/// this crate never interprets it.
#[derive(Debug, Clone)]
pub struct Binding<A> {
	description: Arc<str>,
	action: A,
}

impl<A> Binding<A> {
	/// Short description shown by suggestion surfaces.
	pub fn description(&self) -> &str {
		&self.description
	}

	/// The bound action value.
	pub fn action(&self) -> &A {
		&self.action
	}
}

/// Per-mode mapping from chord string to binding.
///
/// Immutable once built. Iteration order is declaration order, which keeps
/// the pending-set display deterministic.
#[derive(Debug, Clone, Default)]
pub struct ActionTable<A> {
	entries: IndexMap<Box<str>, Binding<A>>,
}

impl<A> ActionTable<A> {
	/// Returns the binding for an exact chord, if declared.
	pub fn get(&self, chord: &str) -> Option<&Binding<A>> {
		self.entries.get(chord)
	}

	/// Returns true if the exact chord is declared.
	pub fn contains(&self, chord: &str) -> bool {
		self.entries.contains_key(chord)
	}

	/// Iterates `(chord, binding)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding<A>)> {
		self.entries.iter().map(|(chord, binding)| (chord.as_ref(), binding))
	}

	/// Iterates chords whose string form starts with `prefix`.
	///
	/// Resolution filters by string prefix, not token prefix: this matches
	/// the accumulated buffer exactly as a suggestion UI would.
	pub fn chords_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
		self.entries.keys().map(Box::as_ref).filter(move |chord: &&str| chord.starts_with(prefix))
	}

	/// Number of declared chords.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no chords are declared.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Collects bindings and validates them into an [`ActionTable`].
#[derive(Debug)]
pub struct ActionTableBuilder<A> {
	bindings: Vec<(String, Arc<str>, A)>,
}

impl<A> Default for ActionTableBuilder<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A> ActionTableBuilder<A> {
	pub fn new() -> Self {
		Self { bindings: Vec::new() }
	}

	/// Declares a chord binding. Validation happens in [`Self::build`].
	pub fn bind(mut self, chord: &str, description: &str, action: A) -> Self {
		self.bindings.push((chord.to_string(), Arc::from(description), action));
		self
	}

	/// Validates and builds the table.
	///
	/// Rejects empty chords, duplicates, and chords that are strict string
	/// prefixes of other chords (unreachable under first-unique-match
	/// resolution).
	pub fn build(self) -> Result<ActionTable<A>, KeymapError> {
		let mut entries: IndexMap<Box<str>, Binding<A>> = IndexMap::with_capacity(self.bindings.len());
		for (chord, description, action) in self.bindings {
			if chord.trim().is_empty() {
				return Err(KeymapError::EmptyChord {
					description: description.to_string(),
				});
			}
			if entries.contains_key(chord.as_str()) {
				return Err(KeymapError::Duplicate { chord });
			}
			entries.insert(chord.into_boxed_str(), Binding { description, action });
		}

		let chords: Vec<&str> = entries.keys().map(Box::as_ref).collect();
		for a in &chords {
			for b in &chords {
				if a != b && b.starts_with(a) {
					return Err(KeymapError::PrefixConflict {
						shorter: a.to_string(),
						longer: b.to_string(),
					});
				}
			}
		}

		Ok(ActionTable { entries })
	}
}

#[cfg(test)]
mod tests;
