//! The mode state machine.
//!
//! Owns the current mode, the chord resolver, the active hint session, and
//! the find-character memory — all the transient session state there is.
//! One instance lives per document context and is reset, not recreated,
//! between sessions. Every abort path funnels through [`ModeStateMachine::reset`]
//! so no candidates, buffers, or armed searches survive a transition.

mod dispatch;

use argent_config::ConfigHandle;
use argent_host::{Candidate, DocumentProvider, PopupHost, SelectionProvider, TabMessenger};
use argent_keymap::{ChordResolver, Outcome};
use argent_primitives::{Bias, Direction, Key, Mode};
use tracing::debug;

use crate::bindings::ModeTables;
use crate::event::{Disposition, KeyEvent};
use crate::find::SearchMemory;
use crate::hints::{HintSession, HintStep};

type Cand<D> = Candidate<<D as DocumentProvider>::Element, <D as DocumentProvider>::TextNode>;

/// Modal interpreter for key events.
///
/// Stateless with respect to the page itself: every document fact is read
/// through the providers at dispatch time, so a stale handle can at worst
/// make one command a no-op.
#[derive(Debug)]
pub struct ModeStateMachine<D, S, T, P>
where
	D: DocumentProvider,
	S: SelectionProvider<Node = D::TextNode>,
	T: TabMessenger,
	P: PopupHost,
{
	pub(crate) doc: D,
	pub(crate) selection: S,
	pub(crate) tabs: T,
	pub(crate) popups: P,
	config: ConfigHandle,
	tables: ModeTables,
	mode: Mode,
	resolver: ChordResolver,
	passthrough_resolver: ChordResolver,
	pub(crate) hint: Option<HintSession<D::Element, D::TextNode>>,
	pub(crate) pending_find: Option<(Direction, Bias)>,
	pub(crate) memory: Option<SearchMemory>,
	passthrough: bool,
	active_element: Option<D::Element>,
}

impl<D, S, T, P> ModeStateMachine<D, S, T, P>
where
	D: DocumentProvider,
	S: SelectionProvider<Node = D::TextNode>,
	T: TabMessenger,
	P: PopupHost,
{
	/// Creates a machine with the stock binding tables.
	pub fn new(doc: D, selection: S, tabs: T, popups: P, config: ConfigHandle) -> Result<Self, argent_keymap::KeymapError> {
		Ok(Self::with_tables(doc, selection, tabs, popups, config, ModeTables::default_bindings()?))
	}

	/// Creates a machine with caller-supplied tables.
	pub fn with_tables(doc: D, selection: S, tabs: T, popups: P, config: ConfigHandle, tables: ModeTables) -> Self {
		Self {
			doc,
			selection,
			tabs,
			popups,
			config,
			tables,
			mode: Mode::Normal,
			resolver: ChordResolver::new(),
			passthrough_resolver: ChordResolver::new(),
			hint: None,
			pending_find: None,
			memory: None,
			passthrough: false,
			active_element: None,
		}
	}

	/// The active mode.
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Returns true while a hint or visual session is active.
	pub fn is_session_active(&self) -> bool {
		self.mode != Mode::Normal
	}

	/// Returns true while passthrough suspends interpretation.
	pub fn is_passthrough(&self) -> bool {
		self.passthrough
	}

	/// The in-progress chord buffer.
	pub fn pending_chord(&self) -> &str {
		self.resolver.buffer()
	}

	/// Chords matching the in-progress buffer, with their descriptions, for
	/// a suggestion surface.
	pub fn pending_bindings(&self) -> Vec<(&str, &str)> {
		let buffer = self.resolver.buffer();
		let (table, _) = self.tables.for_mode(self.mode);
		table
			.iter()
			.filter(|(chord, _)| chord.starts_with(buffer))
			.map(|(chord, binding)| (chord, binding.description()))
			.collect()
	}

	/// Labels of the live hint session, in document order.
	pub fn hint_labels(&self) -> Vec<&str> {
		self.hint.as_ref().map(HintSession::labels).unwrap_or_default()
	}

	/// The typed label prefix of the live hint session.
	pub fn typed_hint_prefix(&self) -> Option<&str> {
		self.hint.as_ref().map(HintSession::typed)
	}

	/// The shared configuration handle.
	pub fn config(&self) -> &ConfigHandle {
		&self.config
	}

	/// The document provider.
	pub fn document(&self) -> &D {
		&self.doc
	}

	/// Remembers the element the user last clicked or focused; scroll
	/// commands target it.
	pub fn note_active_element(&mut self, element: D::Element) {
		self.active_element = Some(element);
	}

	/// Clears all transient session state and returns to Normal mode.
	pub fn reset(&mut self, hide_popups: bool) {
		if hide_popups {
			self.popups.hide_all();
		}
		self.soft_reset();
	}

	pub(crate) fn soft_reset(&mut self) {
		self.hint = None;
		self.resolver.clear();
		self.pending_find = None;
		self.memory = None;
		self.mode = Mode::Normal;
	}

	/// Interprets one keydown that no listener consumed.
	pub fn handle_key(&mut self, event: &KeyEvent<D::Element>) -> Disposition {
		let key = event.key;
		if key.is_modifier_only() {
			return Disposition::FallThrough;
		}

		// Focus guard: typing into a text control must stay native.
		if self.focus_guard_trips(event) {
			debug!("focus guard reset");
			self.soft_reset();
			return Disposition::FallThrough;
		}

		if self.passthrough {
			return self.handle_passthrough_key(key);
		}

		// Global escape, unless the active mode's table binds it.
		if key.is_escape() {
			let (table, _) = self.tables.for_mode(self.mode);
			if self.mode == Mode::Hinting || !table.contains("escape") {
				self.reset(true);
				return Disposition::Handled;
			}
		}

		match self.mode {
			Mode::Hinting => self.handle_hint_key(key),
			Mode::Normal | Mode::VisualCaret | Mode::VisualRange => {
				if self.pending_find.is_some() && self.mode.is_visual() {
					return self.handle_find_char(key);
				}
				self.handle_chord_key(key)
			}
		}
	}

	fn focus_guard_trips(&self, event: &KeyEvent<D::Element>) -> bool {
		let current = event.target.clone().or_else(|| self.current_element());
		current.is_some_and(|element| self.doc.control_kind(&element).is_guarded())
	}

	pub(crate) fn current_element(&self) -> Option<D::Element> {
		if let Some(element) = &self.active_element
			&& self.doc.is_connected(element)
		{
			return Some(element.clone());
		}
		self.doc.active_element()
	}

	/// While passthrough is on, keys flow to the page untouched; only
	/// completing the toggle chord re-enables interpretation.
	fn handle_passthrough_key(&mut self, key: Key) -> Disposition {
		let leader = self.config.load().leader;
		let token = key.token_with_leader(leader);
		match self.passthrough_resolver.feed(&self.tables.passthrough, &token) {
			Outcome::Resolved(_) => {
				debug!("passthrough off");
				self.passthrough = false;
				Disposition::Handled
			}
			Outcome::Pending | Outcome::NoMatch => Disposition::FallThrough,
		}
	}

	fn handle_hint_key(&mut self, key: Key) -> Disposition {
		let Some(c) = key.bare_char() else {
			// Modified keys neither select nor abort; the session waits.
			return Disposition::Handled;
		};
		let Some(session) = &mut self.hint else {
			self.soft_reset();
			return Disposition::FallThrough;
		};
		match session.type_char(c) {
			HintStep::Pending => Disposition::Handled,
			HintStep::Resolved(candidate) => {
				let intent = session.intent().clone();
				let completion = session.completion();
				self.hint = None;
				self.mode = Mode::Normal;
				self.complete_hint(candidate, intent, completion);
				Disposition::Handled
			}
			HintStep::Abort => {
				debug!(prefix = session.typed(), "hint prefix matched nothing");
				self.hint = None;
				self.mode = Mode::Normal;
				Disposition::Handled
			}
		}
	}

	fn handle_chord_key(&mut self, key: Key) -> Disposition {
		let leader = self.config.load().leader;
		let token = key.token_with_leader(leader);
		let (table, gate) = self.tables.for_mode(self.mode);

		// Keys foreign to this mode fall through untouched, but only while
		// no chord is in progress: mid-chord every key feeds the resolver.
		if self.resolver.is_empty() && !gate.admits(&token) {
			return Disposition::FallThrough;
		}

		match self.resolver.feed(table, &token) {
			Outcome::Pending => {
				debug!(buffer = self.resolver.buffer(), "chord pending");
				Disposition::Handled
			}
			Outcome::NoMatch => {
				debug!(%token, "chord matched nothing");
				Disposition::Handled
			}
			Outcome::Resolved(binding) => {
				let action = binding.action().clone();
				self.dispatch(action);
				Disposition::Handled
			}
		}
	}

	fn handle_find_char(&mut self, key: Key) -> Disposition {
		let Some((direction, bias)) = self.pending_find.take() else {
			return Disposition::FallThrough;
		};
		let Some(c) = key.bare_char() else {
			// Any non-character key cancels the armed search.
			return Disposition::Handled;
		};
		self.memory = Some(SearchMemory { ch: c, direction, bias });
		self.execute_find(c, direction, bias);
		Disposition::Handled
	}

	pub(crate) fn clear_hint_session(&mut self) {
		self.hint = None;
	}

	pub(crate) fn set_mode(&mut self, mode: Mode) {
		self.mode = mode;
	}

	pub(crate) fn enable_passthrough(&mut self) {
		self.soft_reset();
		self.passthrough = true;
		self.passthrough_resolver.clear();
	}

	pub(crate) fn start_session(&mut self, session: HintSession<D::Element, D::TextNode>) {
		self.hint = Some(session);
		self.mode = Mode::Hinting;
	}
}

#[cfg(test)]
mod tests;
