//! The top-level event router.
//!
//! Owns the listener stack and the mode state machine and wires them in the
//! mandated order: listeners first (LIFO first refusal), then the blocklist
//! short-circuit, then modal dispatch. This is the outward surface other
//! components embed.

use argent_host::{DocumentProvider, InteractionIntent, PopupHost, SelectionProvider, TabMessenger};

use crate::action::{HintScan, HintTarget};
use crate::event::{Disposition, KeyEvent};
use crate::listener::{ListenerHandle, ListenerStack};
use crate::machine::ModeStateMachine;

/// Listener stack plus machine behind one keydown/keyup entry point.
#[derive(Debug)]
pub struct EventRouter<D, S, T, P>
where
	D: DocumentProvider,
	S: SelectionProvider<Node = D::TextNode>,
	T: TabMessenger,
	P: PopupHost,
{
	listeners: ListenerStack<D::Element>,
	machine: ModeStateMachine<D, S, T, P>,
}

impl<D, S, T, P> EventRouter<D, S, T, P>
where
	D: DocumentProvider,
	S: SelectionProvider<Node = D::TextNode>,
	T: TabMessenger,
	P: PopupHost,
{
	pub fn new(machine: ModeStateMachine<D, S, T, P>) -> Self {
		Self {
			listeners: ListenerStack::new(),
			machine,
		}
	}

	/// Routes one keydown event.
	pub fn keydown(&mut self, event: &KeyEvent<D::Element>) -> Disposition {
		if self.listeners.dispatch_keydown(event) {
			return Disposition::Handled;
		}
		// Disabled documents get native keys, but transient UI above still
		// had its chance.
		let config = self.machine.config().load();
		if config.is_disabled_for(&self.machine.document().document_url()) {
			return Disposition::FallThrough;
		}
		self.machine.handle_key(event)
	}

	/// Routes one keyup event; only listeners see these.
	pub fn keyup(&mut self, event: &KeyEvent<D::Element>) -> Disposition {
		if self.listeners.dispatch_keyup(event) {
			Disposition::Handled
		} else {
			Disposition::FallThrough
		}
	}

	/// Registers a transient keydown interceptor.
	pub fn register_keydown_listener(&mut self, listener: impl Fn(&KeyEvent<D::Element>) -> bool + 'static) -> ListenerHandle {
		self.listeners.register_keydown(listener)
	}

	/// Registers a transient keyup interceptor.
	pub fn register_keyup_listener(&mut self, listener: impl Fn(&KeyEvent<D::Element>) -> bool + 'static) -> ListenerHandle {
		self.listeners.register_keyup(listener)
	}

	/// Clears all transient machine state, optionally hiding popups too.
	pub fn reset_state(&mut self, hide_popups: bool) {
		self.machine.reset(hide_popups);
	}

	/// Hides every popup without touching machine state.
	pub fn hide_all_popups(&self) {
		self.machine.popups.hide_all();
	}

	/// Scans `selector` and opens a hint session over the result — the
	/// programmatic way for other components to trigger hinting.
	pub fn highlight_by_selector(&mut self, selector: &str, intent: InteractionIntent, check_opacity: bool) {
		let mut scan = HintScan::new(HintTarget::Custom(selector.to_string()), intent);
		scan.check_opacity = check_opacity;
		self.machine.highlight(scan);
	}

	/// Returns true while a hint or visual session is active, for UI to
	/// react to.
	pub fn is_session_active(&self) -> bool {
		self.machine.is_session_active()
	}

	/// Remembers the element the user last clicked or focused.
	pub fn note_active_element(&mut self, element: D::Element) {
		self.machine.note_active_element(element);
	}

	pub fn machine(&self) -> &ModeStateMachine<D, S, T, P> {
		&self.machine
	}

	pub fn machine_mut(&mut self) -> &mut ModeStateMachine<D, S, T, P> {
		&mut self.machine
	}
}
