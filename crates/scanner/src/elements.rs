use argent_host::{Candidate, DocumentProvider};
use argent_primitives::Size;
use tracing::trace;

/// Knobs for one element scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Whether fully transparent elements are excluded. Input highlighting
	/// turns this off: transparent custom-styled inputs should still be
	/// reachable.
	pub check_opacity: bool,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self { check_opacity: true }
	}
}

/// Enumerates visible, interactable candidates under the document root, in
/// document order.
///
/// The walk explicitly descends into every isolated sub-tree it encounters,
/// recursively — a plain child walk never crosses those boundaries. Each
/// matching element then passes the geometry, visibility, and
/// scroll-clipping pipeline before becoming a candidate. No element appears
/// twice.
pub fn scan_elements<D: DocumentProvider>(doc: &D, selector: &str, options: &ScanOptions) -> Vec<Candidate<D::Element, D::TextNode>> {
	let viewport = doc.viewport();
	let mut out = Vec::new();
	walk(doc, &doc.root(), selector, options, viewport, &mut out);
	trace!(candidates = out.len(), selector, "element scan finished");
	out
}

fn walk<D: DocumentProvider>(
	doc: &D,
	element: &D::Element,
	selector: &str,
	options: &ScanOptions,
	viewport: Size,
	out: &mut Vec<Candidate<D::Element, D::TextNode>>,
) {
	if doc.matches(element, selector) && is_eligible(doc, element, options, viewport) {
		out.push(Candidate::Element(element.clone()));
	}
	// Isolated sub-tree content renders where its host sits, so it is
	// visited before the host's ordinary children.
	if let Some(shadow_root) = doc.isolated_subtree(element) {
		walk(doc, &shadow_root, selector, options, viewport, out);
	}
	for child in doc.children(element) {
		walk(doc, &child, selector, options, viewport, out);
	}
}

fn is_eligible<D: DocumentProvider>(doc: &D, element: &D::Element, options: &ScanOptions, viewport: Size) -> bool {
	let rect = doc.bounding_box(element);
	if !rect.is_in_viewport(viewport.height) {
		return false;
	}
	if !doc.is_visible(element, options.check_opacity) {
		return false;
	}
	match nearest_scroller(doc, element) {
		Some(ancestor) => !is_clipped_by(doc, rect.top(), &ancestor),
		None => true,
	}
}

/// Finds the nearest ancestor that actually scrolls: it shows a scrollbar
/// and its content exceeds its box. The root is excluded — the viewport test
/// already accounts for document-level scrolling.
fn nearest_scroller<D: DocumentProvider>(doc: &D, element: &D::Element) -> Option<D::Element> {
	let root = doc.root();
	let mut current = doc.parent(element)?;
	while current != root {
		if doc.scroll_info(&current).is_scroller() {
			return Some(current);
		}
		current = doc.parent(&current)?;
	}
	None
}

/// Scroll-clipping test against the nearest scrolling ancestor.
///
/// `top` is the element's laid-out position; subtracting the ancestor's own
/// top yields the offset inside the ancestor's content, and subtracting the
/// current scroll offset yields the position relative to the visible band.
/// When the ancestor's box starts above the viewport, the band's start
/// shifts down by the off-screen amount — positions whose sign still places
/// them in the hidden part are clipped.
fn is_clipped_by<D: DocumentProvider>(doc: &D, top: f64, ancestor: &D::Element) -> bool {
	let ancestor_rect = doc.bounding_box(ancestor);
	let info = doc.scroll_info(ancestor);

	let relative = top - ancestor_rect.top() - info.scroll_top;
	let band_start = (-ancestor_rect.top()).max(0.0);
	let band_end = info.client_height;

	relative < band_start || relative >= band_end
}
