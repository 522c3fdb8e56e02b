//! Core types for keyboard-driven page navigation: keys, tokens, geometry, and modes.

/// Directional types for motion and search operations.
pub mod direction;
/// Screen geometry in CSS-pixel space.
pub mod geometry;
/// Key event types and canonical token rendering.
pub mod key;
/// Navigation mode definitions.
pub mod mode;

pub use direction::{Bias, Direction, Granularity, HorizontalDir};
pub use geometry::{Point, Rect, Size};
pub use key::{Key, KeyCode, Modifiers};
pub use mode::Mode;
