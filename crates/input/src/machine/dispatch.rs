//! Action interpretation against the host providers.

use argent_host::{Candidate, DocumentProvider, InteractionIntent, PopupHost, SelectionProvider, TabMessenger, TabRequest};
use argent_primitives::{Bias, Direction, Mode};
use argent_scanner::labels::LabelStyle;
use argent_scanner::{ScanOptions, scan_elements, scan_words};
use tracing::debug;

use super::{Cand, ModeStateMachine};
use crate::action::{ActionKind, HintScan, ScrollCmd, SelectionCmd};
use crate::hints::{HintCompletion, HintSession};

impl<D, S, T, P> ModeStateMachine<D, S, T, P>
where
	D: DocumentProvider,
	S: SelectionProvider<Node = D::TextNode>,
	T: TabMessenger,
	P: PopupHost,
{
	pub(crate) fn dispatch(&mut self, action: ActionKind) {
		match action {
			ActionKind::Scroll(cmd) => self.scroll(cmd),
			ActionKind::Hint(scan) => self.begin_element_hint(scan),
			ActionKind::EnterVisual => self.enter_visual(),
			ActionKind::EnterRange => {
				self.set_mode(Mode::VisualRange);
			}
			ActionKind::CollapseToCaret => {
				self.selection.collapse_to_end();
				self.set_mode(Mode::VisualCaret);
			}
			ActionKind::Selection(cmd) => self.apply_selection(cmd),
			ActionKind::ArmFind { direction, bias } => {
				self.pending_find = Some((direction, bias));
			}
			ActionKind::RepeatFind { reversed } => self.repeat_find(reversed),
			ActionKind::SelectParagraph => {
				self.selection.select_paragraph();
			}
			ActionKind::SelectWord => {
				self.selection.select_word();
			}
			ActionKind::Tab(request) => self.send_tab_request(request),
			ActionKind::TogglePassthrough => self.enable_passthrough(),
			ActionKind::ToggleHelp => self.popups.toggle_help(),
			ActionKind::ToggleLinkList => self.popups.toggle_link_list(),
		}
	}

	/// Programmatic entry point: scan with a caller-supplied configuration
	/// and open a hint session over the result.
	pub fn highlight(&mut self, scan: HintScan) {
		self.begin_element_hint(scan);
	}

	fn begin_element_hint(&mut self, scan: HintScan) {
		// A new scan always tears down the previous session first.
		self.clear_hint_session();
		let config = self.config().load();
		let selector = scan.target.selector(&config);
		let candidates = scan_elements(&self.doc, &selector, &ScanOptions {
			check_opacity: scan.check_opacity,
		});
		if candidates.is_empty() {
			debug!(%selector, "hint scan found nothing");
			return;
		}
		let labels = argent_scanner::labels::assign(scan.style, candidates.len());
		self.start_session(HintSession::new(labels, candidates, scan.intent, HintCompletion::Interact));
	}

	/// Entering visual mode: adopt an existing range, or run a word-hint
	/// sub-session to place the caret first.
	fn enter_visual(&mut self) {
		self.memory = None;
		if self.selection.exists() && !self.selection.is_collapsed() {
			self.set_mode(Mode::VisualRange);
			return;
		}
		self.clear_hint_session();
		let candidates = scan_words(&self.doc, &self.doc.root());
		if candidates.is_empty() {
			debug!("no word spans to anchor visual mode");
			return;
		}
		let labels = argent_scanner::labels::assign(LabelStyle::Pair, candidates.len());
		self.start_session(HintSession::new(
			labels,
			candidates,
			InteractionIntent::Focus,
			HintCompletion::BeginVisual,
		));
	}

	pub(crate) fn complete_hint(&mut self, candidate: Cand<D>, intent: InteractionIntent, completion: HintCompletion) {
		match completion {
			HintCompletion::Interact => self.interact(candidate, intent),
			HintCompletion::BeginVisual => {
				if let Candidate::Span { node, start, .. } = candidate
					&& self.selection.collapse_to(&node, start)
				{
					self.set_mode(Mode::VisualCaret);
				}
			}
		}
	}

	fn interact(&mut self, candidate: Cand<D>, intent: InteractionIntent) {
		let Candidate::Element(element) = candidate else {
			return;
		};
		// Text-entry elements force focus; the excluded input kinds keep
		// the configured intent.
		let intent = if self.doc.control_kind(&element).forces_focus() && !matches!(intent, InteractionIntent::Focus) {
			InteractionIntent::Focus
		} else {
			intent
		};
		match intent {
			InteractionIntent::Click => self.doc.click(&element),
			InteractionIntent::DoubleClick => self.doc.double_click(&element),
			InteractionIntent::Focus => self.doc.focus(&element),
			InteractionIntent::Hover => self.doc.hover(&element),
			InteractionIntent::OpenInNewTab { background, container } => {
				// Privileged: always delegated, never performed locally.
				let Some(url) = self.doc.link_url(&element) else {
					return;
				};
				self.send_tab_request(TabRequest::OpenNewTab {
					url: Some(url),
					background,
					position: None,
					window: argent_host::TabWindow::Current,
					container,
				});
			}
		}
	}

	fn send_tab_request(&mut self, request: TabRequest) {
		if let Err(error) = self.tabs.send(request) {
			// Delivery is the collaborator's concern; our state is already
			// consistent.
			debug!(%error, "tab request failed");
		}
	}

	fn apply_selection(&mut self, cmd: SelectionCmd) {
		if !self.selection.modify(cmd.alter, cmd.dir, cmd.granularity) {
			return;
		}
		if cmd.alter == argent_host::SelectionAlter::Extend && self.mode() == Mode::VisualCaret {
			self.set_mode(Mode::VisualRange);
		}
	}

	pub(crate) fn execute_find(&mut self, ch: char, direction: Direction, bias: Bias) {
		let Some((node, offset)) = self.selection.focus() else {
			return;
		};
		let text = self.selection.node_text(&node);
		let Some(target) = crate::find::find_in_text(&text, offset, ch, direction, bias) else {
			debug!(%ch, "character not found");
			return;
		};
		match self.mode() {
			Mode::VisualCaret => {
				self.selection.collapse_to(&node, target);
			}
			Mode::VisualRange => {
				self.selection.extend_to(&node, target);
			}
			Mode::Normal | Mode::Hinting => {}
		}
	}

	fn repeat_find(&mut self, reversed: bool) {
		let Some(memory) = self.memory else {
			return;
		};
		let direction = if reversed { memory.direction.reversed() } else { memory.direction };
		self.execute_find(memory.ch, direction, memory.bias);
	}

	fn scroll(&mut self, cmd: ScrollCmd) {
		let target = self.scroll_target();
		let config = self.config().load();
		let viewport = self.doc.viewport();
		match cmd {
			ScrollCmd::StepUp => self.doc.scroll_by(&target, -config.scroll_step),
			ScrollCmd::StepDown => self.doc.scroll_by(&target, config.scroll_step),
			ScrollCmd::HalfPageUp => self.doc.scroll_by(&target, -(viewport.height / 2.0)),
			ScrollCmd::HalfPageDown => self.doc.scroll_by(&target, viewport.height / 2.0),
			ScrollCmd::Top => self.doc.set_scroll_top(&target, 0.0),
			ScrollCmd::Bottom => {
				let info = self.doc.scroll_info(&target);
				self.doc.set_scroll_top(&target, info.scroll_height);
			}
		}
	}

	/// The element scroll commands act on: the current element if it
	/// overflows, else its nearest overflowing ancestor, else the root.
	fn scroll_target(&self) -> D::Element {
		let root = self.doc.root();
		let Some(element) = self.current_element() else {
			return root;
		};
		if self.doc.scroll_info(&element).is_overflowing() {
			return element;
		}
		let mut cursor = self.doc.parent(&element);
		while let Some(ancestor) = cursor {
			if self.doc.scroll_info(&ancestor).is_overflowing() {
				return ancestor;
			}
			cursor = self.doc.parent(&ancestor);
		}
		root
	}
}
