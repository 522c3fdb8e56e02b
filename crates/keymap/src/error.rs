use thiserror::Error;

/// Action-table construction failures.
///
/// These are programmer errors in binding declarations and are surfaced at
/// table build time, never during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
	/// A binding was declared with an empty chord string.
	#[error("empty chord for binding `{description}`")]
	EmptyChord {
		/// Description of the offending binding.
		description: String,
	},

	/// Two bindings declared the same chord.
	#[error("duplicate chord `{chord}`")]
	Duplicate {
		/// The chord declared twice.
		chord: String,
	},

	/// One chord is a strict prefix of another.
	///
	/// Under first-unique-match resolution the shorter chord could never
	/// resolve: its prefix set always also contains the longer chord.
	#[error("chord `{shorter}` is a prefix of `{longer}` and can never resolve")]
	PrefixConflict {
		/// The unreachable shorter chord.
		shorter: String,
		/// The chord shadowing it.
		longer: String,
	},
}
