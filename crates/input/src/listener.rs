//! Transient-UI key interceptors.
//!
//! Popups and other short-lived surfaces register listeners to get first
//! refusal on key events before modal dispatch. Listeners run in reverse
//! registration order (most recent first); the first one returning `true`
//! consumes the event outright. Dispatch iterates a snapshot, so a listener
//! may unregister itself — or any other listener — mid-flight.

use std::cell::Cell;
use std::rc::Rc;

use crate::event::KeyEvent;

type Listener<E> = Rc<dyn Fn(&KeyEvent<E>) -> bool>;

/// Unregistration handle for one listener.
///
/// Dropping the handle does not unregister; call
/// [`ListenerHandle::unregister`] explicitly. Callers own their cleanup.
#[derive(Debug, Clone)]
pub struct ListenerHandle {
	alive: Rc<Cell<bool>>,
}

impl ListenerHandle {
	/// Removes the listener. Safe to call at any time, including from
	/// inside a listener during dispatch.
	pub fn unregister(&self) {
		self.alive.set(false);
	}

	/// Returns true while the listener is still registered.
	pub fn is_registered(&self) -> bool {
		self.alive.get()
	}
}

struct Entry<E> {
	alive: Rc<Cell<bool>>,
	listener: Listener<E>,
}

/// Ordered keydown/keyup interceptor registry with LIFO first refusal.
pub struct ListenerStack<E> {
	keydown: Vec<Entry<E>>,
	keyup: Vec<Entry<E>>,
}

impl<E> Default for ListenerStack<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> std::fmt::Debug for ListenerStack<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ListenerStack")
			.field("keydown", &self.keydown.len())
			.field("keyup", &self.keyup.len())
			.finish()
	}
}

impl<E> ListenerStack<E> {
	pub fn new() -> Self {
		Self {
			keydown: Vec::new(),
			keyup: Vec::new(),
		}
	}

	/// Registers a keydown interceptor with first-refusal priority.
	pub fn register_keydown(&mut self, listener: impl Fn(&KeyEvent<E>) -> bool + 'static) -> ListenerHandle {
		Self::register(&mut self.keydown, listener)
	}

	/// Registers a keyup interceptor with first-refusal priority.
	pub fn register_keyup(&mut self, listener: impl Fn(&KeyEvent<E>) -> bool + 'static) -> ListenerHandle {
		Self::register(&mut self.keyup, listener)
	}

	fn register(entries: &mut Vec<Entry<E>>, listener: impl Fn(&KeyEvent<E>) -> bool + 'static) -> ListenerHandle {
		let alive = Rc::new(Cell::new(true));
		entries.push(Entry {
			alive: alive.clone(),
			listener: Rc::new(listener),
		});
		ListenerHandle { alive }
	}

	/// Offers a keydown event to the stack. Returns true if consumed.
	pub fn dispatch_keydown(&mut self, event: &KeyEvent<E>) -> bool {
		Self::dispatch(&mut self.keydown, event)
	}

	/// Offers a keyup event to the stack. Returns true if consumed.
	pub fn dispatch_keyup(&mut self, event: &KeyEvent<E>) -> bool {
		Self::dispatch(&mut self.keyup, event)
	}

	fn dispatch(entries: &mut Vec<Entry<E>>, event: &KeyEvent<E>) -> bool {
		// Snapshot so concurrent unregistration cannot skew iteration.
		let snapshot: Vec<(Rc<Cell<bool>>, Listener<E>)> =
			entries.iter().map(|entry| (entry.alive.clone(), entry.listener.clone())).collect();

		let mut handled = false;
		for (alive, listener) in snapshot.iter().rev() {
			if alive.get() && listener(event) {
				handled = true;
				break;
			}
		}

		entries.retain(|entry| entry.alive.get());
		handled
	}

	/// Number of live keydown listeners.
	pub fn keydown_len(&self) -> usize {
		self.keydown.iter().filter(|entry| entry.alive.get()).count()
	}

	/// Number of live keyup listeners.
	pub fn keyup_len(&self) -> usize {
		self.keyup.iter().filter(|entry| entry.alive.get()).count()
	}
}
