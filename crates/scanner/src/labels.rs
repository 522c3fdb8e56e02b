//! Hint label sequences.
//!
//! Labels are drawn from the lowercase alphabet. The pair sequence
//! enumerates ordered pairs `(a, b)` with `a ≠ b`, first letter outermost:
//! `ab ac … az ba bc … zy`, giving `26 × 25 = 650` labels. The single
//! sequence is the plain alphabet, for small candidate sets. Both are pure
//! functions of the index — two sessions labeling the same count always get
//! identical sequences — and all labels within one sequence share a length,
//! so a session's label set is prefix-free.

const ALPHABET_LEN: usize = 26;

/// Label sequence flavor for a hint session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
	/// Two-letter labels; up to 650 candidates.
	#[default]
	Pair,
	/// Single-letter labels; up to 26 candidates.
	Single,
}

impl LabelStyle {
	/// Number of labels the style can produce.
	pub fn total_count(self) -> usize {
		match self {
			Self::Pair => ALPHABET_LEN * (ALPHABET_LEN - 1),
			Self::Single => ALPHABET_LEN,
		}
	}

	/// The label at `index`, or `None` past the end of the sequence.
	pub fn label_for_index(self, index: usize) -> Option<String> {
		match self {
			Self::Pair => pair_label(index),
			Self::Single => letter(index).map(String::from),
		}
	}
}

fn letter(index: usize) -> Option<char> {
	(index < ALPHABET_LEN).then(|| (b'a' + index as u8) as char)
}

fn pair_label(index: usize) -> Option<String> {
	if index >= ALPHABET_LEN * (ALPHABET_LEN - 1) {
		return None;
	}
	let first = index / (ALPHABET_LEN - 1);
	let slot = index % (ALPHABET_LEN - 1);
	// The second letter ranges over the alphabet with the first letter
	// removed, so slots at or past the first letter shift up by one.
	let second = if slot < first { slot } else { slot + 1 };
	let mut label = String::with_capacity(2);
	label.push(letter(first)?);
	label.push(letter(second)?);
	Some(label)
}

/// The first `count` labels of `style`, capped at the sequence length.
///
/// Candidates beyond the cap receive no label and are excluded from the
/// hinting pass; that is the documented exhaustion behavior, not an error.
pub fn assign(style: LabelStyle, count: usize) -> Vec<String> {
	let take = count.min(style.total_count());
	(0..take).filter_map(|index| style.label_for_index(index)).collect()
}
