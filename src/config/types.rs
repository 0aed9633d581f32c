use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration from a `.relink.toml` file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RuleFile {
	/// Directory to walk, relative to the current directory.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub root: Option<PathBuf>,

	/// File-name suffix of candidate files, e.g. `.ts`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extension: Option<String>,

	/// Rewrite rules, applied in order to every candidate file.
	/// When empty the built-in table is used.
	#[serde(default)]
	pub rules: Vec<RuleSpec>,
}

/// An uncompiled rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
	/// Regex matched against the whole file text.
	pub pattern: String,

	/// Replacement template; `$1` / `${name}` refer to capture groups.
	pub replacement: String,
}

impl RuleSpec {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
		RuleSpec {
			pattern: pattern.into(),
			replacement: replacement.into(),
		}
	}
}

/// A rule file with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedRuleFile {
	/// The parsed rule file.
	pub file: RuleFile,

	/// The path this rule file was loaded from.
	pub path: PathBuf,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub root: Option<PathBuf>,
	pub extension: Option<String>,
}

/// Where the effective rule table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
	BuiltIn,
	File(PathBuf),
}

impl std::fmt::Display for RuleSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RuleSource::BuiltIn => write!(f, "built-in"),
			RuleSource::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Effective settings after merging CLI flags, rule file and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
	pub root: PathBuf,
	pub extension: String,
	pub rules: Vec<RuleSpec>,
	pub rule_source: RuleSource,
}

impl RuleFile {
	/// Reject values that would parse but can never work.
	pub fn validate(&self) -> Result<(), String> {
		if let Some(ref ext) = self.extension
			&& ext.is_empty()
		{
			return Err("extension must not be empty".to_string());
		}

		for (i, rule) in self.rules.iter().enumerate() {
			if rule.pattern.is_empty() {
				return Err(format!("rule {} has an empty pattern", i + 1));
			}
		}

		Ok(())
	}
}
