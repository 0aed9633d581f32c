use std::path::PathBuf;

/// Library-level structured errors for relink.
///
/// Per-file read/write errors are recoverable and end up in a
/// [`crate::rewrite::FileOutcome::Failed`]; everything else aborts the run.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RelinkError {
	#[error("Root directory not found: {path}")]
	RootNotFound {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Root is not a directory: {path}")]
	RootNotDirectory { path: PathBuf },

	#[error("Failed to walk directory: {path}")]
	Walk {
		path: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Rule file not found: {path}")]
	RuleFileNotFound { path: PathBuf },

	#[error("Failed to read rule file: {path}")]
	RuleFileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rule file: {path}")]
	RuleFileParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid rule file {path}: {message}")]
	InvalidRuleFile { path: PathBuf, message: String },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read file: {path}")]
	ReadFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	WriteFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using RelinkError.
pub type Result<T> = std::result::Result<T, RelinkError>;
