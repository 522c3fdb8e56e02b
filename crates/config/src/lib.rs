//! Navigation configuration.
//!
//! A [`Config`] is an immutable snapshot: the interactive-element selector,
//! the leader key, scroll step, the global kill switch, and the site
//! blocklist. [`ConfigHandle`] shares snapshots through `arc-swap`; dispatch
//! reads a fresh snapshot per key event, so external changes take effect on
//! the next keystroke without any callback plumbing.

mod blocklist;
mod error;

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

pub use blocklist::{BlockRule, Blocklist, RuleKind};
pub use error::ConfigError;

/// Selector matching the standard interactive roles, used when no custom
/// selector is configured.
pub const DEFAULT_SELECTOR: &str = "a,button,input,select,textarea,[contenteditable],[role=button],[role=link]";

/// Scroll distance of a single-step scroll command, in pixels.
pub const DEFAULT_SCROLL_STEP: f64 = 70.0;

/// One configuration snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Selector for hintable interactive elements.
	pub selector: String,
	/// Leader key, rendered as the `<leader>` token in chords.
	pub leader: Option<char>,
	/// Pixel distance of one scroll step.
	pub scroll_step: f64,
	/// Global kill switch: when set, all keys fall through.
	pub disabled: bool,
	/// Per-site disable rules.
	pub blocklist: Blocklist,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			selector: DEFAULT_SELECTOR.to_string(),
			leader: Some(' '),
			scroll_step: DEFAULT_SCROLL_STEP,
			disabled: false,
			blocklist: Blocklist::default(),
		}
	}
}

impl Config {
	/// Returns true if navigation is suspended for `url`, either globally or
	/// by a blocklist rule.
	pub fn is_disabled_for(&self, url: &str) -> bool {
		self.disabled || self.blocklist.is_blocked(url)
	}
}

/// Shared, swappable handle to the current [`Config`].
///
/// Cloning is cheap; all clones observe the same snapshot stream.
#[derive(Debug, Clone, Default)]
pub struct ConfigHandle {
	inner: Arc<ArcSwap<Config>>,
}

impl ConfigHandle {
	pub fn new(config: Config) -> Self {
		Self {
			inner: Arc::new(ArcSwap::from_pointee(config)),
		}
	}

	/// The current snapshot.
	pub fn load(&self) -> Arc<Config> {
		self.inner.load_full()
	}

	/// Replaces the current snapshot.
	pub fn store(&self, config: Config) {
		self.inner.store(Arc::new(config));
	}

	/// Replaces the snapshot with a modified copy of the current one.
	pub fn update(&self, f: impl FnOnce(&mut Config)) {
		let mut config = Config::clone(&self.inner.load());
		f(&mut config);
		self.store(config);
	}
}
