use argent_primitives::Key;

/// One raw keyboard event as delivered by the host.
#[derive(Debug, Clone)]
pub struct KeyEvent<E> {
	pub key: Key,
	/// The element the event targeted, when the host knows it.
	pub target: Option<E>,
}

impl<E> KeyEvent<E> {
	pub fn new(key: Key) -> Self {
		Self { key, target: None }
	}

	pub fn with_target(key: Key, target: E) -> Self {
		Self { key, target: Some(target) }
	}
}

/// What the embedder should do with the event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
	/// The core consumed the event; suppress the host's default handling.
	Handled,
	/// The core did not act; let the page see the key natively.
	FallThrough,
}

impl Disposition {
	/// Returns true when the event was consumed.
	pub fn is_handled(self) -> bool {
		self == Self::Handled
	}
}
