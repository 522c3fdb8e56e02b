use std::cell::RefCell;
use std::rc::Rc;

use argent_primitives::{Granularity, HorizontalDir};

use super::document::{MockDocument, MockTextNode};
use crate::selection::{SelectionAlter, SelectionProvider};

#[derive(Debug)]
struct Inner {
	doc: MockDocument,
	anchor: Option<(MockTextNode, usize)>,
	focus: Option<(MockTextNode, usize)>,
	modify_calls: Vec<(SelectionAlter, HorizontalDir, Granularity)>,
	paragraph_selects: usize,
	word_selects: usize,
}

/// In-memory selection over a [`MockDocument`]'s text nodes.
///
/// `modify` records every call; character-granularity calls also move the
/// focus within its node so caret flows are observable. Word, line, and
/// sentence movement are host-engine concerns and are only recorded.
#[derive(Debug, Clone)]
pub struct MockSelection {
	inner: Rc<RefCell<Inner>>,
}

impl MockSelection {
	/// An empty selection bound to a document.
	pub fn new(doc: MockDocument) -> Self {
		Self {
			inner: Rc::new(RefCell::new(Inner {
				doc,
				anchor: None,
				focus: None,
				modify_calls: Vec::new(),
				paragraph_selects: 0,
				word_selects: 0,
			})),
		}
	}

	/// Sets anchor and focus directly.
	pub fn select(&self, anchor: (MockTextNode, usize), focus: (MockTextNode, usize)) {
		let mut inner = self.inner.borrow_mut();
		inner.anchor = Some(anchor);
		inner.focus = Some(focus);
	}

	/// Clears the selection entirely.
	pub fn clear(&self) {
		let mut inner = self.inner.borrow_mut();
		inner.anchor = None;
		inner.focus = None;
	}

	/// Every `modify` call received, in order.
	pub fn modify_calls(&self) -> Vec<(SelectionAlter, HorizontalDir, Granularity)> {
		self.inner.borrow().modify_calls.clone()
	}

	/// Number of paragraph-select commands received.
	pub fn paragraph_selects(&self) -> usize {
		self.inner.borrow().paragraph_selects
	}

	/// Number of word-select commands received.
	pub fn word_selects(&self) -> usize {
		self.inner.borrow().word_selects
	}

	/// The anchor position, if any.
	pub fn anchor(&self) -> Option<(MockTextNode, usize)> {
		self.inner.borrow().anchor
	}

	/// The focus position, if any.
	pub fn focus_position(&self) -> Option<(MockTextNode, usize)> {
		self.inner.borrow().focus
	}
}

impl SelectionProvider for MockSelection {
	type Node = MockTextNode;

	fn exists(&self) -> bool {
		self.inner.borrow().focus.is_some()
	}

	fn is_collapsed(&self) -> bool {
		let inner = self.inner.borrow();
		inner.anchor == inner.focus
	}

	fn modify(&mut self, alter: SelectionAlter, dir: HorizontalDir, granularity: Granularity) -> bool {
		let mut inner = self.inner.borrow_mut();
		inner.modify_calls.push((alter, dir, granularity));
		let Some((node, offset)) = inner.focus else {
			return false;
		};
		if granularity == Granularity::Character {
			use crate::document::DocumentProvider as _;
			let len = inner.doc.text_content(&node).chars().count();
			let moved = match dir {
				HorizontalDir::Left => offset.saturating_sub(1),
				HorizontalDir::Right => (offset + 1).min(len),
			};
			inner.focus = Some((node, moved));
			if alter == SelectionAlter::Move {
				inner.anchor = inner.focus;
			}
		}
		true
	}

	fn collapse_to_end(&mut self) -> bool {
		let mut inner = self.inner.borrow_mut();
		if inner.focus.is_none() {
			return false;
		}
		inner.anchor = inner.focus;
		true
	}

	fn collapse_to(&mut self, node: &MockTextNode, offset: usize) -> bool {
		let mut inner = self.inner.borrow_mut();
		inner.anchor = Some((*node, offset));
		inner.focus = Some((*node, offset));
		true
	}

	fn extend_to(&mut self, node: &MockTextNode, offset: usize) -> bool {
		let mut inner = self.inner.borrow_mut();
		if inner.anchor.is_none() {
			inner.anchor = Some((*node, offset));
		}
		inner.focus = Some((*node, offset));
		true
	}

	fn focus(&self) -> Option<(MockTextNode, usize)> {
		self.inner.borrow().focus
	}

	fn node_text(&self, node: &MockTextNode) -> String {
		use crate::document::DocumentProvider as _;
		self.inner.borrow().doc.text_content(node)
	}

	fn select_paragraph(&mut self) -> bool {
		let mut inner = self.inner.borrow_mut();
		inner.paragraph_selects += 1;
		inner.focus.is_some()
	}

	fn select_word(&mut self) -> bool {
		let mut inner = self.inner.borrow_mut();
		inner.word_selects += 1;
		inner.focus.is_some()
	}
}
