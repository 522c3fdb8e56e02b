//! Modal key dispatch for keyboard-driven page navigation.
//!
//! Every raw key event enters through the [`EventRouter`]: transient-UI
//! listeners get first refusal in LIFO order, then the
//! [`ModeStateMachine`] interprets the key according to the active
//! [`Mode`](argent_primitives::Mode) — chord resolution in Normal mode,
//! label disambiguation in Hinting mode, selection and character-search
//! commands in the visual modes. All dispatch is synchronous inside the
//! host's keyboard callback; the only asynchronous edge is the
//! fire-and-forget tab messaging channel.

pub mod action;
pub mod bindings;
mod event;
pub mod find;
mod hints;
mod listener;
mod machine;
mod router;

pub use action::{ActionKind, HintScan, HintTarget, ScrollCmd, SelectionCmd};
pub use event::{Disposition, KeyEvent};
pub use find::{SearchMemory, find_in_text};
pub use hints::{HintCompletion, HintSession, HintStep};
pub use listener::{ListenerHandle, ListenerStack};
pub use machine::ModeStateMachine;
pub use router::EventRouter;
