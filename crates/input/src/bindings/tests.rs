use argent_keymap::{ChordResolver, Outcome};
use argent_primitives::Mode;

use super::ModeTables;
use crate::action::{ActionKind, ScrollCmd};

#[test]
fn default_tables_build_cleanly() {
	let tables = ModeTables::default_bindings().unwrap();
	assert!(!tables.normal.is_empty());
	assert!(!tables.visual_caret.is_empty());
	assert!(!tables.visual_range.is_empty());
	assert_eq!(tables.passthrough.len(), 1);
}

#[test]
fn scroll_to_top_resolves_after_two_tokens() {
	let tables = ModeTables::default_bindings().unwrap();
	let mut resolver = ChordResolver::new();

	assert!(matches!(resolver.feed(&tables.normal, "g"), Outcome::Pending));
	match resolver.feed(&tables.normal, "g") {
		Outcome::Resolved(binding) => {
			assert_eq!(*binding.action(), ActionKind::Scroll(ScrollCmd::Top));
		}
		other => panic!("expected Resolved, got {other:?}"),
	}
}

#[test]
fn escape_is_bound_only_in_range_mode() {
	let tables = ModeTables::default_bindings().unwrap();
	assert!(!tables.normal.contains("escape"));
	assert!(!tables.visual_caret.contains("escape"));
	assert!(tables.visual_range.contains("escape"));
}

#[test]
fn normal_gate_passes_bound_keys_and_rejects_others() {
	let tables = ModeTables::default_bindings().unwrap();
	let (_, gate) = tables.for_mode(Mode::Normal);
	assert!(gate.admits("g"));
	assert!(gate.admits("S-g"));
	assert!(!gate.admits("z"));
	// The normal gate keeps modifiers significant.
	assert!(!gate.admits("C-j"));
}

#[test]
fn visual_gates_strip_modifiers() {
	let tables = ModeTables::default_bindings().unwrap();
	let (_, gate) = tables.for_mode(Mode::VisualCaret);
	assert!(gate.admits("w"));
	assert!(gate.admits("S-w"));
	assert!(!gate.admits("z"));
}
