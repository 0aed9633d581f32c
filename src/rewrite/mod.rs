//! Per-file rewriting.
//!
//! This module handles:
//! - Reading a candidate file and applying the rule table
//! - Writing changed content back atomically
//! - Turning per-file errors into a [`FileOutcome`] instead of aborting

pub mod io;

use crate::error::RelinkError;
use crate::rules::RuleTable;
use std::borrow::Cow;
use std::path::Path;

/// Whether changed content is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
	#[default]
	Apply,
	DryRun,
}

/// Result of processing one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
	/// Content differed after rewriting (and was written, unless dry-run).
	Changed,
	/// No rule changed the content; the file was not touched.
	Unchanged,
	/// The file could not be read, decoded or written.
	Failed { reason: String },
}

impl FileOutcome {
	pub fn is_changed(&self) -> bool {
		matches!(self, FileOutcome::Changed)
	}

	pub fn is_failed(&self) -> bool {
		matches!(self, FileOutcome::Failed { .. })
	}
}

/// Rewrite one file with the rule table.
///
/// The file is either left byte-identical or replaced in a single atomic
/// write. Errors are logged and reported as [`FileOutcome::Failed`].
pub fn rewrite_file(path: &Path, table: &RuleTable, mode: WriteMode) -> FileOutcome {
	match try_rewrite_file(path, table, mode) {
		Ok(true) => FileOutcome::Changed,
		Ok(false) => FileOutcome::Unchanged,
		Err(e) => {
			let reason = error_chain(&e);
			tracing::warn!(path = %path.display(), error = %reason, "skipping file");
			FileOutcome::Failed { reason }
		}
	}
}

fn try_rewrite_file(path: &Path, table: &RuleTable, mode: WriteMode) -> Result<bool, RelinkError> {
	let original = io::read_text(path)?;

	let rewritten = match table.apply(&original) {
		Cow::Borrowed(_) => return Ok(false),
		Cow::Owned(text) => text,
	};

	// A rule can match and still produce identical text.
	if rewritten == original {
		return Ok(false);
	}

	if mode == WriteMode::Apply {
		io::write_atomic(path, &rewritten)?;
	}

	Ok(true)
}

fn error_chain(err: &RelinkError) -> String {
	let mut message = err.to_string();
	let mut source = std::error::Error::source(err);
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::RuleSpec;
	use std::fs;

	fn table() -> RuleTable {
		RuleTable::compile(&[RuleSpec::new(
			r"from '\.\./email/",
			"from '../../../infraestrutura/email/",
		)])
		.unwrap()
	}

	#[test]
	fn test_changed_file_is_rewritten() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		fs::write(&path, "import { M } from '../email/mailer';\n").unwrap();

		assert_eq!(rewrite_file(&path, &table(), WriteMode::Apply), FileOutcome::Changed);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"import { M } from '../../../infraestrutura/email/mailer';\n"
		);
	}

	#[test]
	fn test_second_pass_is_unchanged() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		fs::write(&path, "import { M } from '../email/mailer';\n").unwrap();

		rewrite_file(&path, &table(), WriteMode::Apply);
		assert_eq!(
			rewrite_file(&path, &table(), WriteMode::Apply),
			FileOutcome::Unchanged
		);
	}

	#[test]
	fn test_unmatched_file_left_identical() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		let content = "import { B } from '../foo/bar';\r\n";
		fs::write(&path, content).unwrap();
		let before = fs::metadata(&path).unwrap().modified().unwrap();

		assert_eq!(
			rewrite_file(&path, &table(), WriteMode::Apply),
			FileOutcome::Unchanged
		);
		assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
		assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
	}

	#[test]
	fn test_identity_replacement_is_unchanged() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		fs::write(&path, "keep me").unwrap();
		let table = RuleTable::compile(&[RuleSpec::new("keep", "keep")]).unwrap();

		assert_eq!(rewrite_file(&path, &table, WriteMode::Apply), FileOutcome::Unchanged);
	}

	#[test]
	fn test_dry_run_does_not_write() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		let content = "import { M } from '../email/mailer';\n";
		fs::write(&path, content).unwrap();

		assert_eq!(rewrite_file(&path, &table(), WriteMode::DryRun), FileOutcome::Changed);
		assert_eq!(fs::read_to_string(&path).unwrap(), content);
	}

	#[test]
	fn test_invalid_utf8_is_failure() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		fs::write(&path, [0xff, 0xfe, 0x00, b'x']).unwrap();

		let outcome = rewrite_file(&path, &table(), WriteMode::Apply);
		assert!(outcome.is_failed());
		assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, b'x']);
	}

	#[test]
	fn test_missing_file_is_failure_with_path() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("gone.ts");

		match rewrite_file(&path, &table(), WriteMode::Apply) {
			FileOutcome::Failed { reason } => assert!(reason.contains("gone.ts")),
			other => panic!("Expected failure, got {other:?}"),
		}
	}

	#[test]
	fn test_rewrite_keeps_similarly_named_sibling() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		let sibling = temp_dir.path().join("a.ts.relink.tmp");
		fs::write(&path, "import { M } from '../email/mailer';\n").unwrap();
		fs::write(&sibling, "USER DATA").unwrap();

		assert_eq!(rewrite_file(&path, &table(), WriteMode::Apply), FileOutcome::Changed);
		assert_eq!(fs::read_to_string(&sibling).unwrap(), "USER DATA");
	}

	#[cfg(unix)]
	#[test]
	fn test_read_only_file_is_failure() {
		use std::os::unix::fs::PermissionsExt;

		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("a.ts");
		let content = "import { M } from '../email/mailer';\n";
		fs::write(&path, content).unwrap();
		fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

		// Privileged users can write through 0o444; nothing to check then.
		if fs::OpenOptions::new().write(true).open(&path).is_ok() {
			return;
		}

		assert!(rewrite_file(&path, &table(), WriteMode::Apply).is_failed());
		assert_eq!(fs::read_to_string(&path).unwrap(), content);
	}
}
