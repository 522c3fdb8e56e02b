/// Transient-UI collaborator.
///
/// Popups (help overlay, link list) render outside the core; the core only
/// tells them when to hide or toggle. A popup that wants first refusal on
/// keys registers a listener with the event router.
pub trait PopupHost {
	/// Hides every popup this host manages.
	fn hide_all(&self);

	/// Toggles the chord help overlay.
	fn toggle_help(&self);

	/// Toggles the link-and-button list popup.
	fn toggle_link_list(&self);
}
