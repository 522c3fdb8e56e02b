use argent_config::ConfigHandle;
use argent_host::mock::{ElementSpec, Interaction, MockDocument, MockSelection, MockTextNode, RecordingMessenger, RecordingPopups};
use argent_host::{ControlKind, DocumentProvider, ScrollInfo, TabRequest};
use argent_primitives::{Key, Mode, Point, Rect, Size};
use pretty_assertions::assert_eq;

use super::ModeStateMachine;
use crate::event::{Disposition, KeyEvent};

type Machine = ModeStateMachine<MockDocument, MockSelection, RecordingMessenger, RecordingPopups>;

struct Fixture {
	doc: MockDocument,
	selection: MockSelection,
	tabs: RecordingMessenger,
	popups: RecordingPopups,
	machine: Machine,
}

fn fixture() -> Fixture {
	let doc = MockDocument::new(Size::new(800.0, 600.0), "https://example.com/");
	let selection = MockSelection::new(doc.clone());
	let tabs = RecordingMessenger::new();
	let popups = RecordingPopups::new();
	let machine = ModeStateMachine::new(
		doc.clone(),
		selection.clone(),
		tabs.clone(),
		popups.clone(),
		ConfigHandle::default(),
	)
	.unwrap();
	Fixture {
		doc,
		selection,
		tabs,
		popups,
		machine,
	}
}

fn press(machine: &mut Machine, key: Key) -> Disposition {
	machine.handle_key(&KeyEvent::new(key))
}

fn type_chars(machine: &mut Machine, chars: &str) {
	for c in chars.chars() {
		press(machine, Key::char(c));
	}
}

/// A root that can actually scroll.
fn scrollable_root(fixture: &Fixture) {
	fixture.doc.configure_scroll(&fixture.doc.root(), ScrollInfo {
		scroll_top: 0.0,
		scroll_height: 3000.0,
		client_height: 600.0,
		offset_height: 600.0,
		has_scrollbar: true,
	});
}

/// A paragraph holding `text` at a fixed position; returns its text node.
fn paragraph(fixture: &Fixture, text: &str) -> MockTextNode {
	let para = fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("p").rect(Rect::new(0.0, 100.0, 800.0, 20.0)));
	fixture.doc.add_text(&para, text, Point::new(0.0, 100.0), 10.0, 16.0)
}

#[test]
fn starts_in_normal_mode_with_no_session() {
	let fixture = fixture();
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert!(!fixture.machine.is_session_active());
	assert_eq!(fixture.machine.pending_chord(), "");
}

#[test]
fn unbound_keys_fall_through_untouched() {
	let mut fixture = fixture();
	assert_eq!(press(&mut fixture.machine, Key::char('z')), Disposition::FallThrough);
	assert_eq!(fixture.machine.pending_chord(), "");
}

#[test]
fn scroll_chord_resolves_and_scrolls() {
	let mut fixture = fixture();
	scrollable_root(&fixture);
	let root = fixture.doc.root();

	// Step down twice, then back to top via "g g".
	press(&mut fixture.machine, Key::char('j'));
	press(&mut fixture.machine, Key::char('j'));
	assert_eq!(fixture.doc.scroll_top(&root), 140.0);

	assert_eq!(press(&mut fixture.machine, Key::char('g')), Disposition::Handled);
	assert_eq!(fixture.machine.pending_chord(), "g");
	press(&mut fixture.machine, Key::char('g'));
	assert_eq!(fixture.doc.scroll_top(&root), 0.0);
	assert_eq!(fixture.machine.pending_chord(), "");
}

#[test]
fn shift_g_scrolls_to_bottom_and_half_pages_move_by_half_viewport() {
	let mut fixture = fixture();
	scrollable_root(&fixture);
	let root = fixture.doc.root();

	press(&mut fixture.machine, Key::shift('g'));
	// Clamped to scroll_height - client_height.
	assert_eq!(fixture.doc.scroll_top(&root), 2400.0);

	press(&mut fixture.machine, Key::char('e'));
	assert_eq!(fixture.doc.scroll_top(&root), 2100.0);
}

#[test]
fn invalid_chord_is_discarded_and_next_chord_starts_fresh() {
	let mut fixture = fixture();
	scrollable_root(&fixture);
	let root = fixture.doc.root();

	assert_eq!(press(&mut fixture.machine, Key::char('g')), Disposition::Handled);
	// "g x" matches nothing; consumed and discarded.
	assert_eq!(press(&mut fixture.machine, Key::char('x')), Disposition::Handled);
	assert_eq!(fixture.machine.pending_chord(), "");

	press(&mut fixture.machine, Key::char('j'));
	assert_eq!(fixture.doc.scroll_top(&root), 70.0);
}

#[test]
fn scroll_targets_the_nearest_overflowing_ancestor_of_the_active_element() {
	let mut fixture = fixture();
	scrollable_root(&fixture);
	let pane = fixture.doc.add_element(
		&fixture.doc.root(),
		ElementSpec::new("div").rect(Rect::new(0.0, 0.0, 400.0, 300.0)).scrollable(900.0, 300.0),
	);
	let inner = fixture.doc.add_element(&pane, ElementSpec::new("span").rect(Rect::new(0.0, 10.0, 100.0, 20.0)));

	fixture.machine.note_active_element(inner);
	press(&mut fixture.machine, Key::char('j'));
	assert_eq!(fixture.doc.scroll_top(&pane), 70.0);
	assert_eq!(fixture.doc.scroll_top(&fixture.doc.root()), 0.0);

	// Once the noted element is gone, scrolling falls back to the root.
	fixture.doc.disconnect(&inner);
	press(&mut fixture.machine, Key::char('j'));
	assert_eq!(fixture.doc.scroll_top(&fixture.doc.root()), 70.0);
}

#[test]
fn hint_session_labels_candidates_and_resolves_a_click() {
	let mut fixture = fixture();
	let first = fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("a").rect(Rect::new(0.0, 10.0, 50.0, 20.0)));
	let _second = fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("button").rect(Rect::new(0.0, 40.0, 50.0, 20.0)));

	press(&mut fixture.machine, Key::char('f'));
	assert_eq!(fixture.machine.mode(), Mode::Hinting);
	assert_eq!(fixture.machine.hint_labels(), ["ab", "ac"]);

	type_chars(&mut fixture.machine, "ab");
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert_eq!(fixture.doc.interactions(), [(first, Interaction::Click)]);
}

#[test]
fn hint_prefix_prunes_candidates() {
	let mut fixture = fixture();
	for y in [10.0, 40.0, 70.0] {
		fixture
			.doc
			.add_element(&fixture.doc.root(), ElementSpec::new("a").rect(Rect::new(0.0, y, 50.0, 20.0)));
	}

	press(&mut fixture.machine, Key::char('f'));
	assert_eq!(fixture.machine.hint_labels(), ["ab", "ac", "ad"]);

	press(&mut fixture.machine, Key::char('a'));
	assert_eq!(fixture.machine.mode(), Mode::Hinting);
	assert_eq!(fixture.machine.typed_hint_prefix(), Some("a"));
	assert_eq!(fixture.machine.hint_labels(), ["ab", "ac", "ad"]);

	press(&mut fixture.machine, Key::char('c'));
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert_eq!(fixture.doc.interactions().len(), 1);
}

#[test]
fn unmatched_hint_input_aborts_to_normal() {
	let mut fixture = fixture();
	fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("a").rect(Rect::new(0.0, 10.0, 50.0, 20.0)));

	press(&mut fixture.machine, Key::char('f'));
	assert_eq!(fixture.machine.mode(), Mode::Hinting);

	press(&mut fixture.machine, Key::char('z'));
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert!(fixture.machine.hint_labels().is_empty());
	assert_eq!(fixture.doc.interactions(), []);
}

#[test]
fn empty_scan_keeps_normal_mode() {
	let mut fixture = fixture();
	assert_eq!(press(&mut fixture.machine, Key::char('f')), Disposition::Handled);
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert!(!fixture.machine.is_session_active());
}

#[test]
fn new_tab_hints_delegate_to_the_messenger() {
	let mut fixture = fixture();
	fixture.doc.add_element(
		&fixture.doc.root(),
		ElementSpec::new("a").rect(Rect::new(0.0, 10.0, 50.0, 20.0)).link("https://example.com/next"),
	);

	type_chars(&mut fixture.machine, "gf");
	assert_eq!(fixture.machine.mode(), Mode::Hinting);
	type_chars(&mut fixture.machine, "ab");

	// No local interaction; the privileged action went over the channel.
	assert_eq!(fixture.doc.interactions(), []);
	match fixture.tabs.sent().as_slice() {
		[TabRequest::OpenNewTab { url, background, .. }] => {
			assert_eq!(url.as_deref(), Some("https://example.com/next"));
			assert!(*background);
		}
		other => panic!("expected one OpenNewTab request, got {other:?}"),
	}
}

#[test]
fn text_inputs_force_focus_even_in_click_sessions() {
	let mut fixture = fixture();
	let input = fixture.doc.add_element(
		&fixture.doc.root(),
		ElementSpec::new("input").rect(Rect::new(0.0, 10.0, 50.0, 20.0)).control(ControlKind::TextInput),
	);

	press(&mut fixture.machine, Key::char('f'));
	type_chars(&mut fixture.machine, "ab");
	assert_eq!(fixture.doc.interactions(), [(input, Interaction::Focus)]);
}

#[test]
fn checkbox_keeps_the_configured_click_intent() {
	let mut fixture = fixture();
	let checkbox = fixture.doc.add_element(
		&fixture.doc.root(),
		ElementSpec::new("input").rect(Rect::new(0.0, 10.0, 50.0, 20.0)).control(ControlKind::Checkbox),
	);

	press(&mut fixture.machine, Key::char('f'));
	type_chars(&mut fixture.machine, "ab");
	assert_eq!(fixture.doc.interactions(), [(checkbox, Interaction::Click)]);
}

#[test]
fn focus_guard_resets_without_consuming() {
	let mut fixture = fixture();
	fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("a").rect(Rect::new(0.0, 10.0, 50.0, 20.0)));
	press(&mut fixture.machine, Key::char('f'));
	assert_eq!(fixture.machine.mode(), Mode::Hinting);

	let field = fixture.doc.add_element(
		&fixture.doc.root(),
		ElementSpec::new("textarea").rect(Rect::new(0.0, 40.0, 100.0, 40.0)).control(ControlKind::TextArea),
	);
	fixture.doc.set_active(Some(field));

	// The keystroke reaches the control natively; the session is gone.
	assert_eq!(press(&mut fixture.machine, Key::char('a')), Disposition::FallThrough);
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert!(fixture.machine.hint_labels().is_empty());
}

#[test]
fn guard_ignores_interceptable_input_kinds() {
	let mut fixture = fixture();
	scrollable_root(&fixture);
	let checkbox = fixture.doc.add_element(
		&fixture.doc.root(),
		ElementSpec::new("input").rect(Rect::new(0.0, 10.0, 20.0, 20.0)).control(ControlKind::Checkbox),
	);
	fixture.doc.set_active(Some(checkbox));

	assert_eq!(press(&mut fixture.machine, Key::char('j')), Disposition::Handled);
	assert_eq!(fixture.doc.scroll_top(&fixture.doc.root()), 70.0);
}

#[test]
fn escape_resets_any_session_and_hides_popups() {
	let mut fixture = fixture();
	fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("a").rect(Rect::new(0.0, 10.0, 50.0, 20.0)));
	press(&mut fixture.machine, Key::char('f'));
	assert_eq!(fixture.machine.mode(), Mode::Hinting);

	assert_eq!(press(&mut fixture.machine, Key::escape()), Disposition::Handled);
	assert_eq!(fixture.machine.mode(), Mode::Normal);
	assert_eq!(fixture.popups.hide_all_count(), 1);
}

#[test]
fn passthrough_suspends_interpretation_until_toggled_back() {
	let mut fixture = fixture();
	scrollable_root(&fixture);
	let root = fixture.doc.root();

	type_chars(&mut fixture.machine, "gp");
	assert!(fixture.machine.is_passthrough());

	// Bound keys now fall through and do nothing.
	assert_eq!(press(&mut fixture.machine, Key::char('j')), Disposition::FallThrough);
	assert_eq!(fixture.doc.scroll_top(&root), 0.0);

	// The toggle chord itself is still recognized.
	assert_eq!(press(&mut fixture.machine, Key::char('g')), Disposition::FallThrough);
	assert_eq!(press(&mut fixture.machine, Key::char('p')), Disposition::Handled);
	assert!(!fixture.machine.is_passthrough());

	press(&mut fixture.machine, Key::char('j'));
	assert_eq!(fixture.doc.scroll_top(&root), 70.0);
}

#[test]
fn tab_chords_fire_requests_and_survive_channel_failure() {
	let mut fixture = fixture();

	press(&mut fixture.machine, Key::shift('j'));
	press(&mut fixture.machine, Key::shift('k'));
	assert_eq!(fixture.tabs.sent(), [TabRequest::GoToPrevTab, TabRequest::GoToNextTab]);

	fixture.tabs.set_failing(true);
	assert_eq!(press(&mut fixture.machine, Key::shift('j')), Disposition::Handled);
	assert_eq!(fixture.machine.mode(), Mode::Normal);
}

#[test]
fn help_and_link_list_chords_toggle_popups() {
	let mut fixture = fixture();
	press(&mut fixture.machine, Key::shift('?'));
	assert_eq!(fixture.popups.help_toggles(), 1);

	type_chars(&mut fixture.machine, "lf");
	assert_eq!(fixture.popups.link_list_toggles(), 1);
}

#[test]
fn visual_entry_hints_words_and_places_the_caret() {
	let mut fixture = fixture();
	let node = paragraph(&fixture, "the cat sat");

	press(&mut fixture.machine, Key::char('v'));
	assert_eq!(fixture.machine.mode(), Mode::Hinting);
	assert_eq!(fixture.machine.hint_labels(), ["ab", "ac", "ad"]);

	// Pick the second word: caret lands at its start offset.
	type_chars(&mut fixture.machine, "ac");
	assert_eq!(fixture.machine.mode(), Mode::VisualCaret);
	assert_eq!(fixture.selection.focus_position(), Some((node, 4)));
}

#[test]
fn visual_entry_with_no_words_stays_normal() {
	let mut fixture = fixture();
	assert_eq!(press(&mut fixture.machine, Key::char('v')), Disposition::Handled);
	assert_eq!(fixture.machine.mode(), Mode::Normal);
}

#[test]
fn visual_entry_adopts_an_existing_range() {
	let mut fixture = fixture();
	let node = paragraph(&fixture, "the cat sat");
	fixture.selection.select((node, 0), (node, 3));

	press(&mut fixture.machine, Key::char('v'));
	assert_eq!(fixture.machine.mode(), Mode::VisualRange);
}

#[test]
fn find_char_moves_the_caret_and_repeat_replays_memory() {
	let mut fixture = fixture();
	let node = paragraph(&fixture, "the cat sat");
	press(&mut fixture.machine, Key::char('v'));
	type_chars(&mut fixture.machine, "ab");
	assert_eq!(fixture.machine.mode(), Mode::VisualCaret);
	assert_eq!(fixture.selection.focus_position(), Some((node, 0)));

	// f a → caret on the 'a' of "cat".
	press(&mut fixture.machine, Key::char('f'));
	press(&mut fixture.machine, Key::char('a'));
	assert_eq!(fixture.selection.focus_position(), Some((node, 5)));

	// ; replays forward, , replays reversed.
	press(&mut fixture.machine, Key::char(';'));
	assert_eq!(fixture.selection.focus_position(), Some((node, 9)));
	press(&mut fixture.machine, Key::char(','));
	assert_eq!(fixture.selection.focus_position(), Some((node, 5)));
}

#[test]
fn find_char_extends_in_range_mode() {
	let mut fixture = fixture();
	let node = paragraph(&fixture, "the cat sat");
	press(&mut fixture.machine, Key::char('v'));
	type_chars(&mut fixture.machine, "ab");
	press(&mut fixture.machine, Key::char('v'));
	assert_eq!(fixture.machine.mode(), Mode::VisualRange);

	press(&mut fixture.machine, Key::char('f'));
	press(&mut fixture.machine, Key::char('a'));
	assert_eq!(fixture.selection.focus_position(), Some((node, 5)));
	assert_eq!(fixture.selection.anchor(), Some((node, 0)));
}

#[test]
fn extend_motion_from_caret_mode_auto_enters_range_mode() {
	let mut fixture = fixture();
	paragraph(&fixture, "the cat sat");
	press(&mut fixture.machine, Key::char('v'));
	type_chars(&mut fixture.machine, "ab");
	assert_eq!(fixture.machine.mode(), Mode::VisualCaret);

	press(&mut fixture.machine, Key::shift('l'));
	assert_eq!(fixture.machine.mode(), Mode::VisualRange);
}

#[test]
fn range_escape_collapses_to_caret_mode_not_normal() {
	let mut fixture = fixture();
	let node = paragraph(&fixture, "the cat sat");
	fixture.selection.select((node, 0), (node, 5));
	press(&mut fixture.machine, Key::char('v'));
	assert_eq!(fixture.machine.mode(), Mode::VisualRange);

	press(&mut fixture.machine, Key::escape());
	assert_eq!(fixture.machine.mode(), Mode::VisualCaret);
	// Collapsed to the focus end.
	assert_eq!(fixture.selection.anchor(), Some((node, 5)));

	// A second escape leaves visual mode entirely.
	press(&mut fixture.machine, Key::escape());
	assert_eq!(fixture.machine.mode(), Mode::Normal);
}

#[test]
fn search_memory_is_cleared_on_visual_exit() {
	let mut fixture = fixture();
	paragraph(&fixture, "the cat sat");
	press(&mut fixture.machine, Key::char('v'));
	type_chars(&mut fixture.machine, "ab");
	press(&mut fixture.machine, Key::char('f'));
	press(&mut fixture.machine, Key::char('a'));

	press(&mut fixture.machine, Key::escape());
	assert_eq!(fixture.machine.mode(), Mode::Normal);

	// Re-entering visual mode starts with empty memory: repeat is a no-op.
	press(&mut fixture.machine, Key::char('v'));
	type_chars(&mut fixture.machine, "ab");
	let before = fixture.selection.focus_position();
	press(&mut fixture.machine, Key::char(';'));
	assert_eq!(fixture.selection.focus_position(), before);
}

#[test]
fn rescan_replaces_the_previous_session() {
	let mut fixture = fixture();
	fixture
		.doc
		.add_element(&fixture.doc.root(), ElementSpec::new("a").rect(Rect::new(0.0, 10.0, 50.0, 20.0)));
	press(&mut fixture.machine, Key::char('f'));
	press(&mut fixture.machine, Key::char('a'));
	assert_eq!(fixture.machine.typed_hint_prefix(), Some("a"));

	// Escape, then a fresh scan: the prefix starts clean.
	press(&mut fixture.machine, Key::escape());
	press(&mut fixture.machine, Key::char('f'));
	assert_eq!(fixture.machine.typed_hint_prefix(), Some(""));
	assert_eq!(fixture.machine.hint_labels(), ["ab"]);
}

#[test]
fn pending_bindings_expose_the_suggestion_set() {
	let mut fixture = fixture();
	press(&mut fixture.machine, Key::char('g'));
	let pending = fixture.machine.pending_bindings();
	let chords: Vec<&str> = pending.iter().map(|(chord, _)| *chord).collect();
	assert_eq!(chords, ["g g", "g f", "g p"]);
}
