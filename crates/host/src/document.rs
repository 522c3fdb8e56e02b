use argent_primitives::{Rect, Size};

/// Scroll metrics for one element, mirroring the host layout engine's
/// `scrollTop`/`scrollHeight`/`clientHeight`/`offsetHeight` quartet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollInfo {
	/// Current vertical scroll offset of the element's content.
	pub scroll_top: f64,
	/// Total scrollable content height.
	pub scroll_height: f64,
	/// Inner height of the element's content box.
	pub client_height: f64,
	/// Outer height of the element's border box.
	pub offset_height: f64,
	/// Whether the element currently shows a scrollbar.
	pub has_scrollbar: bool,
}

impl ScrollInfo {
	/// Returns true if the element's content exceeds its box.
	pub fn is_overflowing(&self) -> bool {
		self.scroll_height > self.offset_height
	}

	/// Returns true if this element genuinely scrolls: it shows a scrollbar
	/// and its content exceeds its box.
	pub fn is_scroller(&self) -> bool {
		self.has_scrollbar && self.is_overflowing()
	}
}

/// Classification of an element for the focus guard and intent forcing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlKind {
	/// Text-like `<input>` (text, search, url, email, password, number…).
	TextInput,
	/// `<textarea>`.
	TextArea,
	/// Inside a non-read-only editable region.
	EditableRegion,
	Checkbox,
	Radio,
	FileInput,
	ColorInput,
	Button,
	Submit,
	Link,
	#[default]
	Other,
}

impl ControlKind {
	/// Kinds that trip the focus guard: keystrokes must reach the control
	/// natively, so the machine resets without consuming them.
	///
	/// Checkbox/radio/file/color/button/submit inputs take no typed text and
	/// stay interceptable.
	pub fn is_guarded(self) -> bool {
		matches!(self, Self::TextInput | Self::TextArea | Self::EditableRegion)
	}

	/// Kinds whose hint resolution forces a [`Focus`] interaction regardless
	/// of the session's configured intent.
	///
	/// [`Focus`]: crate::InteractionIntent::Focus
	pub fn forces_focus(self) -> bool {
		matches!(self, Self::TextInput | Self::TextArea | Self::EditableRegion)
	}
}

/// Document structure, geometry, and interaction capability.
///
/// `Element` and `TextNode` are opaque handles. Geometry is reported in
/// viewport coordinates; positions inside scrolled containers are reported
/// as laid out, with the container's own scroll offset exposed separately
/// through [`DocumentProvider::scroll_info`].
pub trait DocumentProvider {
	type Element: Clone + PartialEq + std::fmt::Debug;
	type TextNode: Clone + PartialEq + std::fmt::Debug;

	/// Viewport dimensions.
	fn viewport(&self) -> Size;

	/// URL of the current document, for blocklist checks.
	fn document_url(&self) -> String;

	/// The document's root element.
	fn root(&self) -> Self::Element;

	/// Child elements in document order. Does not cross isolated sub-tree
	/// boundaries; see [`DocumentProvider::isolated_subtree`].
	fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

	/// The root of an isolated sub-tree hosted by this element (an
	/// encapsulated component boundary), if any.
	fn isolated_subtree(&self, element: &Self::Element) -> Option<Self::Element>;

	/// Parent element, crossing isolated sub-tree boundaries upward.
	fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

	/// Whether the element matches a selector group (comma-separated).
	fn matches(&self, element: &Self::Element, selector: &str) -> bool;

	/// Border box in viewport coordinates.
	fn bounding_box(&self, element: &Self::Element) -> Rect;

	/// Host visibility test. When `check_opacity` is false, fully
	/// transparent elements still count as visible.
	fn is_visible(&self, element: &Self::Element, check_opacity: bool) -> bool;

	/// Scroll metrics for the element.
	fn scroll_info(&self, element: &Self::Element) -> ScrollInfo;

	/// Direct text-node children in document order.
	fn text_children(&self, element: &Self::Element) -> Vec<Self::TextNode>;

	/// Full text of a text node.
	fn text_content(&self, node: &Self::TextNode) -> String;

	/// Tight bounding box of the `[start, end)` character span of a text
	/// node, in viewport coordinates.
	fn span_box(&self, node: &Self::TextNode, start: usize, end: usize) -> Rect;

	/// The element containing a text node.
	fn host_element(&self, node: &Self::TextNode) -> Self::Element;

	/// Control classification for the focus guard and intent forcing.
	fn control_kind(&self, element: &Self::Element) -> ControlKind;

	/// Link target, if the element is a link with a destination.
	fn link_url(&self, element: &Self::Element) -> Option<String>;

	/// The host's currently focused element.
	fn active_element(&self) -> Option<Self::Element>;

	/// Whether the element is still attached to the document.
	fn is_connected(&self, element: &Self::Element) -> bool;

	fn click(&self, element: &Self::Element);
	fn double_click(&self, element: &Self::Element);
	fn focus(&self, element: &Self::Element);
	fn hover(&self, element: &Self::Element);

	/// Scrolls the element's content vertically by `delta_y` pixels.
	fn scroll_by(&self, element: &Self::Element, delta_y: f64);

	/// Sets the element's vertical scroll offset.
	fn set_scroll_top(&self, element: &Self::Element, offset: f64);
}
