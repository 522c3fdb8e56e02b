use thiserror::Error;

/// Configuration load failures.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A blocklist regexp rule does not compile.
	#[error("invalid blocklist pattern `{pattern}`")]
	InvalidPattern {
		/// The raw pattern text.
		pattern: String,
		#[source]
		source: regex::Error,
	},
}
