//! Directional types shared by search and selection commands.

/// Search direction along the text flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Toward the end of the text.
	Forward,
	/// Toward the start of the text.
	Backward,
}

impl Direction {
	/// Returns the opposite direction.
	pub fn reversed(self) -> Self {
		match self {
			Self::Forward => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}
}

/// Where the cursor lands relative to a found character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bias {
	/// Land on the match offset itself.
	Before,
	/// Land one position past the match.
	After,
}

/// Horizontal direction in the host selection's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalDir {
	Left,
	Right,
}

/// Movement granularity supported by the host selection primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
	Character,
	Word,
	Line,
	Sentence,
}
