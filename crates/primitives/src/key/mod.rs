//! Key event types and canonical token rendering.
//!
//! A [`Key`] is one keystroke as delivered by the host's keyboard callback.
//! Its canonical token form is the modifier prefixes `C-`, `S-`, `A-`, `M-`
//! (in that fixed order) concatenated with the lowercased key name; chord
//! strings in action tables are space-separated sequences of these tokens.

mod modifiers;

pub use modifiers::Modifiers;

/// The symbolic token the configured leader key renders as.
pub const LEADER_TOKEN: &str = "<leader>";

/// A physical key, without modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A printable character. Uppercase letters are preserved here and
	/// lowercased only during token rendering.
	Char(char),
	Escape,
	Enter,
	Tab,
	Backspace,
	Delete,
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
	/// Function key (F1–F24).
	F(u8),
	/// A bare modifier press (Control, Shift, Alt, Meta alone).
	ModifierOnly,
	/// A named key the core never binds; always falls through.
	Other,
}

impl KeyCode {
	/// Canonical lowercase name used in tokens and chord strings.
	pub fn name(self) -> String {
		match self {
			Self::Char(' ') => "space".to_string(),
			Self::Char(c) => c.to_lowercase().to_string(),
			Self::Escape => "escape".to_string(),
			Self::Enter => "enter".to_string(),
			Self::Tab => "tab".to_string(),
			Self::Backspace => "backspace".to_string(),
			Self::Delete => "delete".to_string(),
			Self::Up => "up".to_string(),
			Self::Down => "down".to_string(),
			Self::Left => "left".to_string(),
			Self::Right => "right".to_string(),
			Self::Home => "home".to_string(),
			Self::End => "end".to_string(),
			Self::PageUp => "pageup".to_string(),
			Self::PageDown => "pagedown".to_string(),
			Self::F(n) => format!("f{n}"),
			Self::ModifierOnly => "modifier".to_string(),
			Self::Other => "unidentified".to_string(),
		}
	}
}

/// One keystroke: a key code plus held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates a key with explicit modifiers.
	pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
		Self { code, modifiers }
	}

	/// Creates an unmodified character key.
	pub fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c), Modifiers::NONE)
	}

	/// Creates a Ctrl-modified character key.
	pub fn ctrl(c: char) -> Self {
		Self::new(KeyCode::Char(c), Modifiers::CTRL)
	}

	/// Creates a Shift-modified character key.
	pub fn shift(c: char) -> Self {
		Self::new(KeyCode::Char(c), Modifiers::SHIFT)
	}

	/// Creates an unmodified escape key.
	pub fn escape() -> Self {
		Self::new(KeyCode::Escape, Modifiers::NONE)
	}

	/// Maps a host key name (the keyboard event's `key` field) to a key.
	///
	/// Single characters map to [`KeyCode::Char`]; known named keys map to
	/// their variants; bare modifier presses map to [`KeyCode::ModifierOnly`];
	/// anything else maps to [`KeyCode::Other`] and will never match a chord.
	pub fn from_name(name: &str, modifiers: Modifiers) -> Self {
		let mut chars = name.chars();
		if let (Some(c), None) = (chars.next(), chars.next()) {
			return Self::new(KeyCode::Char(c), modifiers);
		}
		let code = match name {
			"Escape" => KeyCode::Escape,
			"Enter" => KeyCode::Enter,
			"Tab" => KeyCode::Tab,
			"Backspace" => KeyCode::Backspace,
			"Delete" => KeyCode::Delete,
			"ArrowUp" => KeyCode::Up,
			"ArrowDown" => KeyCode::Down,
			"ArrowLeft" => KeyCode::Left,
			"ArrowRight" => KeyCode::Right,
			"Home" => KeyCode::Home,
			"End" => KeyCode::End,
			"PageUp" => KeyCode::PageUp,
			"PageDown" => KeyCode::PageDown,
			"Control" | "Shift" | "Alt" | "Meta" => KeyCode::ModifierOnly,
			_ => match name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
				Some(n) if (1..=24).contains(&n) => KeyCode::F(n),
				_ => KeyCode::Other,
			},
		};
		Self::new(code, modifiers)
	}

	/// Returns true for an unmodified Escape press.
	pub fn is_escape(&self) -> bool {
		self.code == KeyCode::Escape && self.modifiers.is_empty()
	}

	/// Returns true for a bare modifier press, which dispatch ignores.
	pub fn is_modifier_only(&self) -> bool {
		self.code == KeyCode::ModifierOnly
	}

	/// Returns the unmodified character, if this is a bare character key.
	pub fn bare_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if self.modifiers.is_empty() => Some(c),
			_ => None,
		}
	}

	/// Renders the canonical token for this keystroke.
	pub fn token(&self) -> String {
		self.token_with_leader(None)
	}

	/// Renders the canonical token, mapping the leader key to [`LEADER_TOKEN`].
	///
	/// The leader is remapped before modifier prefixing, so `C-<leader>` is a
	/// valid token.
	pub fn token_with_leader(&self, leader: Option<char>) -> String {
		let name = match (self.code, leader) {
			(KeyCode::Char(c), Some(l)) if c == l => LEADER_TOKEN.to_string(),
			_ => self.code.name(),
		};
		let mut token = String::with_capacity(name.len() + 8);
		if self.modifiers.ctrl {
			token.push_str("C-");
		}
		if self.modifiers.shift {
			token.push_str("S-");
		}
		if self.modifiers.alt {
			token.push_str("A-");
		}
		if self.modifiers.meta {
			token.push_str("M-");
		}
		token.push_str(&name);
		token
	}
}
