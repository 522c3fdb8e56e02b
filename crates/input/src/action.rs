//! Action values bound to chords.
//!
//! Bindings are data, not closures: the resolver yields an [`ActionKind`]
//! and the machine interprets it centrally against the host providers. That
//! keeps tables immutable, cloneable, and sharable between modes.

use argent_config::Config;
use argent_host::{InteractionIntent, TabRequest};
use argent_primitives::{Bias, Direction, Granularity, HorizontalDir};
use argent_scanner::labels::LabelStyle;

/// Scroll commands against the current scroll target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCmd {
	StepUp,
	StepDown,
	HalfPageUp,
	HalfPageDown,
	Top,
	Bottom,
}

/// Which elements a hint scan covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintTarget {
	/// The configured interactive-element selector.
	Configured,
	/// Links only.
	Links,
	/// Text-entry controls.
	Inputs,
	/// A caller-supplied selector (programmatic highlighting).
	Custom(String),
}

impl HintTarget {
	/// Resolves the concrete selector for a scan.
	pub fn selector(&self, config: &Config) -> String {
		match self {
			Self::Configured => config.selector.clone(),
			Self::Links => "a".to_string(),
			Self::Inputs => "input,textarea,[contenteditable]".to_string(),
			Self::Custom(selector) => selector.clone(),
		}
	}
}

/// Parameters of one element-hinting pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HintScan {
	pub target: HintTarget,
	pub intent: InteractionIntent,
	/// Input highlighting scans with this off so transparent custom-styled
	/// controls stay reachable.
	pub check_opacity: bool,
	pub style: LabelStyle,
}

impl HintScan {
	pub fn new(target: HintTarget, intent: InteractionIntent) -> Self {
		Self {
			target,
			intent,
			check_opacity: true,
			style: LabelStyle::default(),
		}
	}

	pub fn ignoring_opacity(mut self) -> Self {
		self.check_opacity = false;
		self
	}
}

/// One host-selection command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCmd {
	pub alter: argent_host::SelectionAlter,
	pub dir: HorizontalDir,
	pub granularity: Granularity,
}

/// Everything a chord can do.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
	Scroll(ScrollCmd),
	/// Scan and label elements for interaction.
	Hint(HintScan),
	/// Enter visual mode, via a word-hint sub-session when the host
	/// selection is absent or collapsed.
	EnterVisual,
	/// Caret mode → range mode.
	EnterRange,
	/// Range mode → caret mode, collapsing the selection to its end.
	CollapseToCaret,
	/// Move or extend the selection by one granularity unit.
	Selection(SelectionCmd),
	/// Wait for a character, then find it in the focus node.
	ArmFind { direction: Direction, bias: Bias },
	/// Replay the remembered character search.
	RepeatFind { reversed: bool },
	SelectParagraph,
	SelectWord,
	/// Fire a request at the tab-management collaborator.
	Tab(TabRequest),
	TogglePassthrough,
	ToggleHelp,
	ToggleLinkList,
}
