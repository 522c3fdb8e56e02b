//! Scriptable in-memory host for tests.
//!
//! [`MockDocument`] is a tree of nodes with explicit rects, visibility,
//! scroll state, isolated sub-trees, and control kinds; it records every
//! interaction dispatched at it. [`MockSelection`] tracks anchor/focus
//! positions over the same text nodes. Handles are cheap index wrappers and
//! all state is shared behind `Rc`, so a test can keep a clone for
//! assertions after handing the mock to the machine.

mod document;
mod selection;
mod support;

pub use document::{ElementSpec, Interaction, MockDocument, MockElement, MockTextNode};
pub use selection::MockSelection;
pub use support::{RecordingMessenger, RecordingPopups};
