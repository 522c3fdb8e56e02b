//! Navigation mode definitions.

/// The active interpretation mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
	/// Chord dispatch against the normal-mode table.
	#[default]
	Normal,
	/// Label disambiguation over scanned candidates.
	Hinting,
	/// Collapsed-caret movement using host selection primitives.
	VisualCaret,
	/// Active-range extension using host selection primitives.
	VisualRange,
}

impl Mode {
	/// Returns a short display label for status surfaces.
	pub fn name(self) -> &'static str {
		match self {
			Self::Normal => "NORMAL",
			Self::Hinting => "HINT",
			Self::VisualCaret => "CARET",
			Self::VisualRange => "RANGE",
		}
	}

	/// Returns true for either visual mode.
	pub fn is_visual(self) -> bool {
		matches!(self, Self::VisualCaret | Self::VisualRange)
	}

	/// Returns true when the mode resolves chords against an action table.
	pub fn has_chord_table(self) -> bool {
		!matches!(self, Self::Hinting)
	}
}
