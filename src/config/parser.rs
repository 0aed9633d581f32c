use crate::config::types::RuleFile;
use crate::error::{RelinkError, Result};
use std::path::Path;

/// Parse a rule file from the given path.
pub fn parse_rule_file(path: &Path) -> Result<RuleFile> {
	let content = std::fs::read_to_string(path).map_err(|source| RelinkError::RuleFileRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rule_str(&content, path)
}

/// Parse a rule file from a string (useful for testing).
pub fn parse_rule_str(content: &str, path: &Path) -> Result<RuleFile> {
	let file: RuleFile = toml::from_str(content).map_err(|source| RelinkError::RuleFileParse {
		path: path.to_path_buf(),
		source,
	})?;

	file.validate()
		.map_err(|message| RelinkError::InvalidRuleFile {
			path: path.to_path_buf(),
			message,
		})?;

	Ok(file)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_rule_file() {
		let path = PathBuf::from("test.toml");
		let file = parse_rule_str("", &path).unwrap();

		assert!(file.root.is_none());
		assert!(file.extension.is_none());
		assert!(file.rules.is_empty());
	}

	#[test]
	fn test_parse_settings() {
		let content = r#"
root = "app/src"
extension = ".tsx"
"#;
		let path = PathBuf::from("test.toml");
		let file = parse_rule_str(content, &path).unwrap();

		assert_eq!(file.root, Some(PathBuf::from("app/src")));
		assert_eq!(file.extension, Some(".tsx".to_string()));
	}

	#[test]
	fn test_parse_rules_array_of_tables() {
		let content = r#"
[[rules]]
pattern = "from '\\.\\./old/"
replacement = "from '../../new/"

[[rules]]
pattern = '(["])\.\./legacy/'
replacement = '${1}../modern/'
"#;
		let path = PathBuf::from("test.toml");
		let file = parse_rule_str(content, &path).unwrap();

		assert_eq!(file.rules.len(), 2);
		assert_eq!(file.rules[0].pattern, r"from '\.\./old/");
		assert_eq!(file.rules[0].replacement, "from '../../new/");
		assert_eq!(file.rules[1].replacement, "${1}../modern/");
	}

	#[test]
	fn test_parse_invalid_toml() {
		let path = PathBuf::from("test.toml");
		let result = parse_rule_str("invalid toml [[[", &path);

		match result.unwrap_err() {
			RelinkError::RuleFileParse { path, .. } => {
				assert_eq!(path, PathBuf::from("test.toml"));
			}
			other => panic!("Expected RuleFileParse error, got {other:?}"),
		}
	}

	#[test]
	fn test_unknown_key_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_rule_str("extensions = \".ts\"", &path);
		assert!(matches!(result, Err(RelinkError::RuleFileParse { .. })));
	}

	#[test]
	fn test_rule_missing_replacement_rejected() {
		let content = r#"
[[rules]]
pattern = "foo"
"#;
		let path = PathBuf::from("test.toml");
		assert!(parse_rule_str(content, &path).is_err());
	}

	#[test]
	fn test_empty_pattern_rejected() {
		let content = r#"
[[rules]]
pattern = ""
replacement = "x"
"#;
		let path = PathBuf::from("test.toml");
		match parse_rule_str(content, &path).unwrap_err() {
			RelinkError::InvalidRuleFile { message, .. } => {
				assert!(message.contains("rule 1"));
			}
			other => panic!("Expected InvalidRuleFile error, got {other:?}"),
		}
	}

	#[test]
	fn test_empty_extension_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_rule_str("extension = \"\"", &path);
		assert!(matches!(result, Err(RelinkError::InvalidRuleFile { .. })));
	}

	#[test]
	fn test_parse_rule_file_missing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("nope.toml");
		let result = parse_rule_file(&path);
		assert!(matches!(result, Err(RelinkError::RuleFileRead { .. })));
	}
}
