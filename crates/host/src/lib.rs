//! Collaborator traits and protocol types the navigation core consumes.
//!
//! The core never touches a real document: it drives these interfaces and
//! lets the embedding layer supply the concrete handles. Handle types are
//! opaque to the core — everything it needs is delegated back through the
//! provider that issued the handle.

mod candidate;
mod document;
mod popup;
mod selection;
mod tabs;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use candidate::{Candidate, InteractionIntent};
pub use document::{ControlKind, DocumentProvider, ScrollInfo};
pub use popup::PopupHost;
pub use selection::{SelectionAlter, SelectionProvider};
pub use tabs::{Container, SendError, Tab, TabId, TabMessenger, TabPosition, TabRequest, TabWindow};
