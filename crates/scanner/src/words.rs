use argent_host::{Candidate, DocumentProvider};
use argent_primitives::Size;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Enumerates word-like text spans under `root`, in document order.
///
/// A text node contributes spans only when its host element passes the same
/// in-viewport and visibility tests as element scanning; each span's own
/// tight box must also sit in the viewport. Whitespace and punctuation
/// segments are skipped. Offsets are character offsets into the node's text.
pub fn scan_words<D: DocumentProvider>(doc: &D, root: &D::Element) -> Vec<Candidate<D::Element, D::TextNode>> {
	let viewport = doc.viewport();
	let mut out = Vec::new();
	walk(doc, root, viewport, &mut out);
	trace!(spans = out.len(), "word scan finished");
	out
}

fn walk<D: DocumentProvider>(doc: &D, element: &D::Element, viewport: Size, out: &mut Vec<Candidate<D::Element, D::TextNode>>) {
	let rect = doc.bounding_box(element);
	if rect.is_in_viewport(viewport.height) && doc.is_visible(element, true) {
		for node in doc.text_children(element) {
			segment_node(doc, &node, viewport, out);
		}
	}
	if let Some(shadow_root) = doc.isolated_subtree(element) {
		walk(doc, &shadow_root, viewport, out);
	}
	for child in doc.children(element) {
		walk(doc, &child, viewport, out);
	}
}

fn segment_node<D: DocumentProvider>(doc: &D, node: &D::TextNode, viewport: Size, out: &mut Vec<Candidate<D::Element, D::TextNode>>) {
	let text = doc.text_content(node);
	for (byte_start, word) in text.split_word_bound_indices() {
		if !word.chars().any(char::is_alphanumeric) {
			continue;
		}
		let start = text[..byte_start].chars().count();
		let end = start + word.chars().count();
		let span = doc.span_box(node, start, end);
		if span.is_in_viewport(viewport.height) {
			out.push(Candidate::Span {
				node: node.clone(),
				start,
				end,
			});
		}
	}
}
