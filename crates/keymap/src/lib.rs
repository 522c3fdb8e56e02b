//! Chord action tables and prefix-disambiguating resolution.
//!
//! An [`ActionTable`] maps chord strings (space-separated key tokens, e.g.
//! `"g g"` or `"S-g"`) to bindings. The [`ChordResolver`] accumulates typed
//! tokens and resolves them against a table with first-unique-match
//! semantics. A [`TokenGate`] pre-filters keystrokes so keys that appear in
//! no chord of the active table fall through to the host untouched.

mod error;
mod gate;
mod resolver;
mod table;

pub use error::KeymapError;
pub use gate::{TokenGate, strip_modifiers};
pub use resolver::{ChordResolver, Outcome};
pub use table::{ActionTable, ActionTableBuilder, Binding};
