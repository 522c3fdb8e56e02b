//! Default binding tables.
//!
//! Tables are built once per machine and never mutated; the visual-caret
//! and visual-range tables share most motion chords but bind them to move
//! vs. extend commands respectively. Gates for the visual modes strip
//! modifiers, so a shifted motion key still counts as relevant to the mode.

use argent_host::{InteractionIntent, SelectionAlter, TabPosition, TabRequest, TabWindow};
use argent_keymap::{ActionTable, ActionTableBuilder, KeymapError, TokenGate};
use argent_primitives::{Bias, Direction, Granularity, HorizontalDir, Mode};

use crate::action::{ActionKind, HintScan, HintTarget, ScrollCmd, SelectionCmd};

/// The chord that toggles passthrough, recognized even while passthrough is
/// active.
pub const PASSTHROUGH_TOGGLE: &str = "g p";

/// Per-mode action tables plus their token gates.
#[derive(Debug, Clone)]
pub struct ModeTables {
	pub normal: ActionTable<ActionKind>,
	pub visual_caret: ActionTable<ActionKind>,
	pub visual_range: ActionTable<ActionKind>,
	/// Single-chord table consulted while passthrough is active.
	pub passthrough: ActionTable<ActionKind>,
	normal_gate: TokenGate,
	caret_gate: TokenGate,
	range_gate: TokenGate,
}

impl ModeTables {
	/// Builds the stock tables.
	pub fn default_bindings() -> Result<Self, KeymapError> {
		Ok(Self::from_tables(
			normal_table()?,
			visual_caret_table()?,
			visual_range_table()?,
			passthrough_table()?,
		))
	}

	/// Assembles tables and derives their gates.
	pub fn from_tables(
		normal: ActionTable<ActionKind>,
		visual_caret: ActionTable<ActionKind>,
		visual_range: ActionTable<ActionKind>,
		passthrough: ActionTable<ActionKind>,
	) -> Self {
		let normal_gate = TokenGate::for_table(&normal, false);
		let caret_gate = TokenGate::for_table(&visual_caret, true);
		let range_gate = TokenGate::for_table(&visual_range, true);
		Self {
			normal,
			visual_caret,
			visual_range,
			passthrough,
			normal_gate,
			caret_gate,
			range_gate,
		}
	}

	/// The chord table and gate for a mode. Hinting has no chord table;
	/// callers must not ask for one.
	pub fn for_mode(&self, mode: Mode) -> (&ActionTable<ActionKind>, &TokenGate) {
		match mode {
			Mode::Normal | Mode::Hinting => (&self.normal, &self.normal_gate),
			Mode::VisualCaret => (&self.visual_caret, &self.caret_gate),
			Mode::VisualRange => (&self.visual_range, &self.range_gate),
		}
	}
}

fn normal_table() -> Result<ActionTable<ActionKind>, KeymapError> {
	ActionTableBuilder::new()
		.bind("k", "Scroll up", ActionKind::Scroll(ScrollCmd::StepUp))
		.bind("j", "Scroll down", ActionKind::Scroll(ScrollCmd::StepDown))
		.bind("e", "Scroll half-page up", ActionKind::Scroll(ScrollCmd::HalfPageUp))
		.bind("d", "Scroll half-page down", ActionKind::Scroll(ScrollCmd::HalfPageDown))
		.bind("g g", "Scroll to top", ActionKind::Scroll(ScrollCmd::Top))
		.bind("S-g", "Scroll to bottom", ActionKind::Scroll(ScrollCmd::Bottom))
		.bind(
			"f",
			"Highlight links & buttons",
			ActionKind::Hint(HintScan::new(HintTarget::Configured, InteractionIntent::Click)),
		)
		.bind(
			"g f",
			"Highlight links to open in new tab",
			ActionKind::Hint(HintScan::new(
				HintTarget::Links,
				InteractionIntent::OpenInNewTab {
					background: true,
					container: None,
				},
			)),
		)
		.bind(
			"i",
			"Highlight inputs",
			ActionKind::Hint(HintScan::new(HintTarget::Inputs, InteractionIntent::Focus).ignoring_opacity()),
		)
		.bind("v", "Start visual selection", ActionKind::EnterVisual)
		.bind("l f", "List links & buttons", ActionKind::ToggleLinkList)
		.bind("S-?", "Show help", ActionKind::ToggleHelp)
		.bind("S-j", "Previous tab", ActionKind::Tab(TabRequest::GoToPrevTab))
		.bind("S-k", "Next tab", ActionKind::Tab(TabRequest::GoToNextTab))
		.bind(
			"t",
			"New tab next to this one",
			ActionKind::Tab(TabRequest::OpenNewTab {
				url: None,
				background: false,
				position: Some(TabPosition::After),
				window: TabWindow::Current,
				container: None,
			}),
		)
		.bind(PASSTHROUGH_TOGGLE, "Toggle passthrough", ActionKind::TogglePassthrough)
		.build()
}

fn motion(alter: SelectionAlter, dir: HorizontalDir, granularity: Granularity) -> ActionKind {
	ActionKind::Selection(SelectionCmd { alter, dir, granularity })
}

fn bind_find_chords(builder: ActionTableBuilder<ActionKind>) -> ActionTableBuilder<ActionKind> {
	builder
		.bind(
			"f",
			"Find character forward",
			ActionKind::ArmFind {
				direction: Direction::Forward,
				bias: Bias::Before,
			},
		)
		.bind(
			"S-f",
			"Find character backward",
			ActionKind::ArmFind {
				direction: Direction::Backward,
				bias: Bias::Before,
			},
		)
		.bind(
			"t",
			"Till character forward",
			ActionKind::ArmFind {
				direction: Direction::Forward,
				bias: Bias::After,
			},
		)
		.bind(
			"S-t",
			"Till character backward",
			ActionKind::ArmFind {
				direction: Direction::Backward,
				bias: Bias::After,
			},
		)
		.bind(";", "Repeat find", ActionKind::RepeatFind { reversed: false })
		.bind(",", "Repeat find reversed", ActionKind::RepeatFind { reversed: true })
}

fn visual_caret_table() -> Result<ActionTable<ActionKind>, KeymapError> {
	use Granularity::{Character, Line, Sentence, Word};
	use HorizontalDir::{Left, Right};
	use SelectionAlter::{Extend, Move};

	let builder = ActionTableBuilder::new()
		.bind("h", "Move left", motion(Move, Left, Character))
		.bind("l", "Move right", motion(Move, Right, Character))
		.bind("b", "Move word left", motion(Move, Left, Word))
		.bind("w", "Move word right", motion(Move, Right, Word))
		.bind("k", "Move line up", motion(Move, Left, Line))
		.bind("j", "Move line down", motion(Move, Right, Line))
		.bind("(", "Move sentence back", motion(Move, Left, Sentence))
		.bind(")", "Move sentence forward", motion(Move, Right, Sentence))
		.bind("S-h", "Extend left", motion(Extend, Left, Character))
		.bind("S-l", "Extend right", motion(Extend, Right, Character))
		.bind("S-b", "Extend word left", motion(Extend, Left, Word))
		.bind("S-w", "Extend word right", motion(Extend, Right, Word))
		.bind("S-k", "Extend line up", motion(Extend, Left, Line))
		.bind("S-j", "Extend line down", motion(Extend, Right, Line))
		.bind("v", "Start extending", ActionKind::EnterRange);
	bind_find_chords(builder).build()
}

fn visual_range_table() -> Result<ActionTable<ActionKind>, KeymapError> {
	use Granularity::{Character, Line, Sentence, Word};
	use HorizontalDir::{Left, Right};
	use SelectionAlter::Extend;

	let builder = ActionTableBuilder::new()
		.bind("h", "Extend left", motion(Extend, Left, Character))
		.bind("l", "Extend right", motion(Extend, Right, Character))
		.bind("b", "Extend word left", motion(Extend, Left, Word))
		.bind("w", "Extend word right", motion(Extend, Right, Word))
		.bind("k", "Extend line up", motion(Extend, Left, Line))
		.bind("j", "Extend line down", motion(Extend, Right, Line))
		.bind("(", "Extend sentence back", motion(Extend, Left, Sentence))
		.bind(")", "Extend sentence forward", motion(Extend, Right, Sentence))
		.bind("a p", "Select paragraph", ActionKind::SelectParagraph)
		.bind("a w", "Select word", ActionKind::SelectWord)
		.bind("v", "Collapse to caret", ActionKind::CollapseToCaret)
		.bind("escape", "Collapse to caret", ActionKind::CollapseToCaret);
	bind_find_chords(builder).build()
}

fn passthrough_table() -> Result<ActionTable<ActionKind>, KeymapError> {
	ActionTableBuilder::new()
		.bind(PASSTHROUGH_TOGGLE, "Toggle passthrough", ActionKind::TogglePassthrough)
		.build()
}

#[cfg(test)]
mod tests;
