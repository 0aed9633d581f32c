use crate::config::defaults::{DEFAULT_EXTENSION, DEFAULT_ROOT, default_rules};
use crate::config::parser::parse_rule_file;
use crate::config::types::{LoadedRuleFile, Overrides, RuleSource, Settings};
use crate::error::{RelinkError, Result};
use std::path::{Path, PathBuf};

/// Conventional rule file name, looked up in the current directory.
pub const RULE_FILE_NAME: &str = ".relink.toml";

/// Locate and load the rule file, if any.
///
/// The lookup order is:
/// 1. `explicit` (from `--rules`); a missing file is an error
/// 2. `.relink.toml` in `cwd`
/// 3. nothing, so built-in settings apply
pub fn discover_rule_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<LoadedRuleFile>> {
	if let Some(path) = explicit {
		if !path.is_file() {
			return Err(RelinkError::RuleFileNotFound {
				path: path.to_path_buf(),
			});
		}
		return load(path).map(Some);
	}

	let conventional = cwd.join(RULE_FILE_NAME);
	if conventional.is_file() {
		return load(&conventional).map(Some);
	}

	Ok(None)
}

fn load(path: &Path) -> Result<LoadedRuleFile> {
	let file = parse_rule_file(path)?;
	tracing::debug!(path = %path.display(), rules = file.rules.len(), "loaded rule file");
	Ok(LoadedRuleFile {
		file,
		path: path.to_path_buf(),
	})
}

/// Merge CLI overrides, an optional rule file and the built-in defaults.
///
/// Precedence is CLI flag, then rule file, then default. A rule file
/// without rules keeps the built-in table.
pub fn resolve_settings(overrides: &Overrides, loaded: Option<&LoadedRuleFile>) -> Settings {
	let file = loaded.map(|l| &l.file);

	let root = overrides
		.root
		.clone()
		.or_else(|| file.and_then(|f| f.root.clone()))
		.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

	let extension = overrides
		.extension
		.clone()
		.or_else(|| file.and_then(|f| f.extension.clone()))
		.unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

	let (rules, rule_source) = match loaded {
		Some(l) if !l.file.rules.is_empty() => {
			(l.file.rules.clone(), RuleSource::File(l.path.clone()))
		}
		_ => (default_rules(), RuleSource::BuiltIn),
	};

	Settings {
		root,
		extension,
		rules,
		rule_source,
	}
}

/// Convenience function to discover the rule file and resolve settings.
pub fn load_settings(overrides: &Overrides, explicit: Option<&Path>, cwd: &Path) -> Result<Settings> {
	let loaded = discover_rule_file(explicit, cwd)?;
	Ok(resolve_settings(overrides, loaded.as_ref()))
}
