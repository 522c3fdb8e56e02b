use pretty_assertions::assert_eq;

use crate::{ActionTableBuilder, KeymapError};

fn table_of(chords: &[&str]) -> Result<crate::ActionTable<u32>, KeymapError> {
	let mut builder = ActionTableBuilder::new();
	for (i, chord) in chords.iter().enumerate() {
		builder = builder.bind(chord, "test", i as u32);
	}
	builder.build()
}

#[test]
fn builds_and_looks_up_exact_chords() {
	let table = table_of(&["g g", "S-g", "j"]).unwrap();
	assert_eq!(table.len(), 3);
	assert_eq!(table.get("g g").map(|b| *b.action()), Some(0));
	assert_eq!(table.get("S-g").map(|b| *b.action()), Some(1));
	assert!(table.get("g").is_none());
}

#[test]
fn declaration_order_is_preserved() {
	let table = table_of(&["j", "k", "g g"]).unwrap();
	let chords: Vec<&str> = table.iter().map(|(chord, _)| chord).collect();
	assert_eq!(chords, ["j", "k", "g g"]);
}

#[test]
fn prefix_filter_uses_string_prefix() {
	let table = table_of(&["g g", "g f", "j"]).unwrap();
	let matches: Vec<&str> = table.chords_with_prefix("g").collect();
	assert_eq!(matches, ["g g", "g f"]);

	let matches: Vec<&str> = table.chords_with_prefix("g g").collect();
	assert_eq!(matches, ["g g"]);
}

#[test]
fn rejects_duplicate_chord() {
	let err = table_of(&["g g", "g g"]).unwrap_err();
	assert_eq!(err, KeymapError::Duplicate { chord: "g g".into() });
}

#[test]
fn rejects_empty_chord() {
	let err = ActionTableBuilder::new().bind("  ", "blank", 0u32).build().unwrap_err();
	assert!(matches!(err, KeymapError::EmptyChord { .. }));
}

#[test]
fn rejects_chord_shadowed_by_longer_chord() {
	let err = table_of(&["g", "g g"]).unwrap_err();
	assert_eq!(
		err,
		KeymapError::PrefixConflict {
			shorter: "g".into(),
			longer: "g g".into(),
		}
	);
}
