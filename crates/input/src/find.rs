//! Find-character caret navigation.
//!
//! Searches the focus node's own text only — it never crosses node
//! boundaries. The bias controls both where the search starts relative to
//! the current offset and where the cursor lands relative to the found
//! character, so repeated searches always make progress.

use argent_primitives::{Bias, Direction};

/// The remembered find-character target, replayed by repeat commands.
///
/// Lives for the lifetime of a visual session and is cleared on mode exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMemory {
	pub ch: char,
	pub direction: Direction,
	pub bias: Bias,
}

/// Finds the next occurrence of `ch` from `offset` and returns the landing
/// offset, or `None` when the character does not occur in that direction.
///
/// Offsets are character offsets. With [`Bias::Before`] the cursor lands on
/// the match offset itself; with [`Bias::After`] it lands one past it. The
/// search start is adjusted by the same bias so a cursor already sitting at
/// its landing spot skips to the following occurrence.
pub fn find_in_text(text: &str, offset: usize, ch: char, direction: Direction, bias: Bias) -> Option<usize> {
	let chars: Vec<char> = text.chars().collect();
	let found = match direction {
		Direction::Forward => {
			let start = match bias {
				Bias::Before => offset.saturating_add(1),
				Bias::After => offset,
			};
			(start.min(chars.len())..chars.len()).find(|&i| chars[i] == ch)
		}
		Direction::Backward => {
			let end = match bias {
				Bias::Before => offset,
				Bias::After => offset.saturating_sub(1),
			};
			(0..end.min(chars.len())).rev().find(|&i| chars[i] == ch)
		}
	};
	found.map(|i| match bias {
		Bias::Before => i,
		Bias::After => i + 1,
	})
}
