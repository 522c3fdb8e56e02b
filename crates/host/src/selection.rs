use argent_primitives::{Granularity, HorizontalDir};

/// Whether a selection command moves the caret or extends the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionAlter {
	Move,
	Extend,
}

/// The host's native text-selection capability.
///
/// Movement semantics (what a "word" or "sentence" is, bidi handling) are
/// entirely the host's; the core only sequences the calls. All operations
/// report success — a `false` return means the host had no usable selection
/// and the command degrades to a no-op.
pub trait SelectionProvider {
	type Node: Clone + PartialEq + std::fmt::Debug;

	/// Whether the host currently has a selection at all.
	fn exists(&self) -> bool;

	/// Whether the selection is collapsed to a caret.
	fn is_collapsed(&self) -> bool;

	/// Moves the caret or extends the range by one unit of `granularity`.
	fn modify(&mut self, alter: SelectionAlter, dir: HorizontalDir, granularity: Granularity) -> bool;

	/// Collapses the selection to its focus end.
	fn collapse_to_end(&mut self) -> bool;

	/// Collapses the selection to a caret at `(node, offset)`.
	fn collapse_to(&mut self, node: &Self::Node, offset: usize) -> bool;

	/// Moves the selection's focus endpoint to `(node, offset)`, keeping the
	/// anchor.
	fn extend_to(&mut self, node: &Self::Node, offset: usize) -> bool;

	/// The selection's focus position, if any.
	fn focus(&self) -> Option<(Self::Node, usize)>;

	/// Full text of the node, in character offsets.
	fn node_text(&self, node: &Self::Node) -> String;

	/// Selects the paragraph-like block around the caret.
	fn select_paragraph(&mut self) -> bool;

	/// Selects the word around the caret.
	fn select_word(&mut self) -> bool;
}
