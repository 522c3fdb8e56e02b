//! Hint label allocation and visible-candidate scanning.
//!
//! Scans walk the host document in document order — descending into every
//! isolated sub-tree — and filter elements through geometry, visibility, and
//! scroll-clipping tests before they become hint candidates. Labels come
//! from a pure indexed sequence, so allocation is deterministic and
//! restartable by construction.

mod elements;
pub mod labels;
mod words;

pub use elements::{ScanOptions, scan_elements};
pub use words::scan_words;
