use std::cell::RefCell;
use std::rc::Rc;

use crate::popup::PopupHost;
use crate::tabs::{SendError, TabMessenger, TabRequest};

#[derive(Debug, Default)]
struct MessengerInner {
	sent: Vec<TabRequest>,
	failing: bool,
}

/// Captures every [`TabRequest`] fired at it.
#[derive(Debug, Clone, Default)]
pub struct RecordingMessenger {
	inner: Rc<RefCell<MessengerInner>>,
}

impl RecordingMessenger {
	pub fn new() -> Self {
		Self::default()
	}

	/// All requests received so far, in order.
	pub fn sent(&self) -> Vec<TabRequest> {
		self.inner.borrow().sent.clone()
	}

	/// Makes every subsequent send fail with a disconnected channel.
	pub fn set_failing(&self, failing: bool) {
		self.inner.borrow_mut().failing = failing;
	}
}

impl TabMessenger for RecordingMessenger {
	fn send(&self, request: TabRequest) -> Result<(), SendError> {
		let mut inner = self.inner.borrow_mut();
		if inner.failing {
			return Err(SendError::Disconnected);
		}
		inner.sent.push(request);
		Ok(())
	}
}

#[derive(Debug, Default)]
struct PopupCounts {
	hide_all: usize,
	help_toggles: usize,
	link_list_toggles: usize,
}

/// Counts popup commands.
#[derive(Debug, Clone, Default)]
pub struct RecordingPopups {
	inner: Rc<RefCell<PopupCounts>>,
}

impl RecordingPopups {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn hide_all_count(&self) -> usize {
		self.inner.borrow().hide_all
	}

	pub fn help_toggles(&self) -> usize {
		self.inner.borrow().help_toggles
	}

	pub fn link_list_toggles(&self) -> usize {
		self.inner.borrow().link_list_toggles
	}
}

impl PopupHost for RecordingPopups {
	fn hide_all(&self) {
		self.inner.borrow_mut().hide_all += 1;
	}

	fn toggle_help(&self) {
		self.inner.borrow_mut().help_toggles += 1;
	}

	fn toggle_link_list(&self) {
		self.inner.borrow_mut().link_list_toggles += 1;
	}
}
