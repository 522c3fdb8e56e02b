use std::cell::RefCell;
use std::rc::Rc;

use argent_primitives::{Point, Rect, Size};

use crate::document::{ControlKind, DocumentProvider, ScrollInfo};

/// Element handle into a [`MockDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockElement(usize);

/// Text-node handle into a [`MockDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTextNode(usize);

/// An interaction the document received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
	Click,
	DoubleClick,
	Focus,
	Hover,
}

/// Declarative description of a mock element.
#[derive(Debug, Clone)]
pub struct ElementSpec {
	tag: String,
	rect: Rect,
	visible: bool,
	opaque: bool,
	scroll: ScrollInfo,
	control: ControlKind,
	url: Option<String>,
}

impl ElementSpec {
	/// A visible, opaque, non-scrolling element with the given tag and a
	/// zero rect.
	pub fn new(tag: &str) -> Self {
		Self {
			tag: tag.to_string(),
			rect: Rect::default(),
			visible: true,
			opaque: true,
			scroll: ScrollInfo::default(),
			control: ControlKind::Other,
			url: None,
		}
	}

	pub fn rect(mut self, rect: Rect) -> Self {
		self.rect = rect;
		self
	}

	/// Fails the host visibility test outright.
	pub fn hidden(mut self) -> Self {
		self.visible = false;
		self
	}

	/// Visible except under opacity-sensitive checks.
	pub fn transparent(mut self) -> Self {
		self.opaque = false;
		self
	}

	/// A genuine scroller: scrollbar shown, content taller than the box.
	pub fn scrollable(mut self, scroll_height: f64, client_height: f64) -> Self {
		self.scroll = ScrollInfo {
			scroll_top: 0.0,
			scroll_height,
			client_height,
			offset_height: client_height,
			has_scrollbar: true,
		};
		self
	}

	/// Overflowing content without a scrollbar (overflow hidden).
	pub fn overflowing(mut self, scroll_height: f64, offset_height: f64) -> Self {
		self.scroll = ScrollInfo {
			scroll_top: 0.0,
			scroll_height,
			client_height: offset_height,
			offset_height,
			has_scrollbar: false,
		};
		self
	}

	pub fn control(mut self, kind: ControlKind) -> Self {
		self.control = kind;
		self
	}

	/// A link with a destination URL.
	pub fn link(mut self, url: &str) -> Self {
		self.control = ControlKind::Link;
		self.url = Some(url.to_string());
		self
	}
}

#[derive(Debug)]
struct TextData {
	text: String,
	origin: Point,
	char_width: f64,
	line_height: f64,
}

#[derive(Debug)]
enum NodeKind {
	Element(ElementSpec),
	Text(TextData),
}

#[derive(Debug)]
struct NodeData {
	parent: Option<usize>,
	children: Vec<usize>,
	shadow: Option<usize>,
	connected: bool,
	kind: NodeKind,
}

#[derive(Debug)]
struct Inner {
	viewport: Size,
	url: String,
	nodes: Vec<NodeData>,
	active: Option<usize>,
	interactions: Vec<(usize, Interaction)>,
}

/// In-memory document implementing [`DocumentProvider`].
///
/// Clones share state, so keep one for assertions.
#[derive(Debug, Clone)]
pub struct MockDocument {
	inner: Rc<RefCell<Inner>>,
}

impl MockDocument {
	/// Creates a document whose root element fills the viewport.
	pub fn new(viewport: Size, url: &str) -> Self {
		let root = NodeData {
			parent: None,
			children: Vec::new(),
			shadow: None,
			connected: true,
			kind: NodeKind::Element(ElementSpec::new("html").rect(Rect::new(0.0, 0.0, viewport.width, viewport.height))),
		};
		Self {
			inner: Rc::new(RefCell::new(Inner {
				viewport,
				url: url.to_string(),
				nodes: vec![root],
				active: None,
				interactions: Vec::new(),
			})),
		}
	}

	fn push_node(&self, parent: usize, kind: NodeKind) -> usize {
		let mut inner = self.inner.borrow_mut();
		let id = inner.nodes.len();
		inner.nodes.push(NodeData {
			parent: Some(parent),
			children: Vec::new(),
			shadow: None,
			connected: true,
			kind,
		});
		inner.nodes[parent].children.push(id);
		id
	}

	/// Appends an element under `parent`.
	pub fn add_element(&self, parent: &MockElement, spec: ElementSpec) -> MockElement {
		MockElement(self.push_node(parent.0, NodeKind::Element(spec)))
	}

	/// Attaches an isolated sub-tree to `host` and returns its root.
	pub fn attach_shadow(&self, host: &MockElement) -> MockElement {
		let mut inner = self.inner.borrow_mut();
		let id = inner.nodes.len();
		inner.nodes.push(NodeData {
			parent: Some(host.0),
			children: Vec::new(),
			shadow: None,
			connected: true,
			kind: NodeKind::Element(ElementSpec::new("#shadow-root")),
		});
		inner.nodes[host.0].shadow = Some(id);
		MockElement(id)
	}

	/// Appends a text node under `parent` with fixed-width glyph metrics.
	pub fn add_text(&self, parent: &MockElement, text: &str, origin: Point, char_width: f64, line_height: f64) -> MockTextNode {
		MockTextNode(self.push_node(
			parent.0,
			NodeKind::Text(TextData {
				text: text.to_string(),
				origin,
				char_width,
				line_height,
			}),
		))
	}

	fn with_spec<R>(&self, element: &MockElement, f: impl FnOnce(&mut ElementSpec) -> R) -> R {
		let mut inner = self.inner.borrow_mut();
		match &mut inner.nodes[element.0].kind {
			NodeKind::Element(spec) => f(spec),
			NodeKind::Text(_) => unreachable!("element handle points at a text node"),
		}
	}

	/// Moves an element on screen.
	pub fn place(&self, element: &MockElement, rect: Rect) {
		self.with_spec(element, |spec| spec.rect = rect);
	}

	/// Replaces an element's scroll metrics (e.g. to make the root a
	/// scroller).
	pub fn configure_scroll(&self, element: &MockElement, scroll: ScrollInfo) {
		self.with_spec(element, |spec| spec.scroll = scroll);
	}

	/// Changes an element's base visibility.
	pub fn set_visible(&self, element: &MockElement, visible: bool) {
		self.with_spec(element, |spec| spec.visible = visible);
	}

	/// Sets the host-focused element.
	pub fn set_active(&self, element: Option<MockElement>) {
		self.inner.borrow_mut().active = element.map(|el| el.0);
	}

	/// Detaches an element from the document.
	pub fn disconnect(&self, element: &MockElement) {
		self.inner.borrow_mut().nodes[element.0].connected = false;
	}

	/// Every interaction dispatched so far, in order.
	pub fn interactions(&self) -> Vec<(MockElement, Interaction)> {
		self.inner.borrow().interactions.iter().map(|&(id, kind)| (MockElement(id), kind)).collect()
	}

	/// Current scroll offset of an element.
	pub fn scroll_top(&self, element: &MockElement) -> f64 {
		self.with_spec_ref(element, |spec| spec.scroll.scroll_top)
	}

	fn with_spec_ref<R>(&self, element: &MockElement, f: impl FnOnce(&ElementSpec) -> R) -> R {
		let inner = self.inner.borrow();
		match &inner.nodes[element.0].kind {
			NodeKind::Element(spec) => f(spec),
			NodeKind::Text(_) => unreachable!("element handle points at a text node"),
		}
	}

	fn record(&self, element: &MockElement, interaction: Interaction) {
		self.inner.borrow_mut().interactions.push((element.0, interaction));
	}
}

impl DocumentProvider for MockDocument {
	type Element = MockElement;
	type TextNode = MockTextNode;

	fn viewport(&self) -> Size {
		self.inner.borrow().viewport
	}

	fn document_url(&self) -> String {
		self.inner.borrow().url.clone()
	}

	fn root(&self) -> MockElement {
		MockElement(0)
	}

	fn children(&self, element: &MockElement) -> Vec<MockElement> {
		let inner = self.inner.borrow();
		inner.nodes[element.0]
			.children
			.iter()
			.filter(|&&id| matches!(inner.nodes[id].kind, NodeKind::Element(_)))
			.map(|&id| MockElement(id))
			.collect()
	}

	fn isolated_subtree(&self, element: &MockElement) -> Option<MockElement> {
		self.inner.borrow().nodes[element.0].shadow.map(MockElement)
	}

	fn parent(&self, element: &MockElement) -> Option<MockElement> {
		self.inner.borrow().nodes[element.0].parent.map(MockElement)
	}

	fn matches(&self, element: &MockElement, selector: &str) -> bool {
		// Simplified matching: each comma-separated selector part matches a
		// literal tag name.
		self.with_spec_ref(element, |spec| selector.split(',').any(|part| part.trim() == spec.tag))
	}

	fn bounding_box(&self, element: &MockElement) -> Rect {
		self.with_spec_ref(element, |spec| spec.rect)
	}

	fn is_visible(&self, element: &MockElement, check_opacity: bool) -> bool {
		self.with_spec_ref(element, |spec| spec.visible && (spec.opaque || !check_opacity))
	}

	fn scroll_info(&self, element: &MockElement) -> ScrollInfo {
		self.with_spec_ref(element, |spec| spec.scroll)
	}

	fn text_children(&self, element: &MockElement) -> Vec<MockTextNode> {
		let inner = self.inner.borrow();
		inner.nodes[element.0]
			.children
			.iter()
			.filter(|&&id| matches!(inner.nodes[id].kind, NodeKind::Text(_)))
			.map(|&id| MockTextNode(id))
			.collect()
	}

	fn text_content(&self, node: &MockTextNode) -> String {
		let inner = self.inner.borrow();
		match &inner.nodes[node.0].kind {
			NodeKind::Text(data) => data.text.clone(),
			NodeKind::Element(_) => String::new(),
		}
	}

	fn span_box(&self, node: &MockTextNode, start: usize, end: usize) -> Rect {
		let inner = self.inner.borrow();
		match &inner.nodes[node.0].kind {
			NodeKind::Text(data) => Rect::new(
				data.origin.x + start as f64 * data.char_width,
				data.origin.y,
				(end - start) as f64 * data.char_width,
				data.line_height,
			),
			NodeKind::Element(_) => Rect::default(),
		}
	}

	fn host_element(&self, node: &MockTextNode) -> MockElement {
		let inner = self.inner.borrow();
		MockElement(inner.nodes[node.0].parent.unwrap_or(0))
	}

	fn control_kind(&self, element: &MockElement) -> ControlKind {
		self.with_spec_ref(element, |spec| spec.control)
	}

	fn link_url(&self, element: &MockElement) -> Option<String> {
		self.with_spec_ref(element, |spec| spec.url.clone())
	}

	fn active_element(&self) -> Option<MockElement> {
		self.inner.borrow().active.map(MockElement)
	}

	fn is_connected(&self, element: &MockElement) -> bool {
		self.inner.borrow().nodes[element.0].connected
	}

	fn click(&self, element: &MockElement) {
		self.record(element, Interaction::Click);
	}

	fn double_click(&self, element: &MockElement) {
		self.record(element, Interaction::DoubleClick);
	}

	fn focus(&self, element: &MockElement) {
		self.record(element, Interaction::Focus);
		self.inner.borrow_mut().active = Some(element.0);
	}

	fn hover(&self, element: &MockElement) {
		self.record(element, Interaction::Hover);
	}

	fn scroll_by(&self, element: &MockElement, delta_y: f64) {
		self.with_spec(element, |spec| {
			let max = (spec.scroll.scroll_height - spec.scroll.client_height).max(0.0);
			spec.scroll.scroll_top = (spec.scroll.scroll_top + delta_y).clamp(0.0, max);
		});
	}

	fn set_scroll_top(&self, element: &MockElement, offset: f64) {
		self.with_spec(element, |spec| {
			let max = (spec.scroll.scroll_height - spec.scroll.client_height).max(0.0);
			spec.scroll.scroll_top = offset.clamp(0.0, max);
		});
	}
}
