//! Run driver: walk the tree, rewrite each candidate, count the results.

use crate::error::{RelinkError, Result};
use crate::rewrite::{FileOutcome, WriteMode, rewrite_file};
use crate::rules::RuleTable;
use crate::walk::candidate_files;
use std::path::{Path, PathBuf};

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
	/// Directory to walk; relative paths are resolved against the current directory.
	pub root: PathBuf,

	/// File-name suffix of candidate files.
	pub extension: String,

	pub mode: WriteMode,
}

/// What happened to one visited file.
#[derive(Debug, Clone)]
pub struct FileReport {
	/// Absolute path of the file.
	pub path: PathBuf,

	/// Path relative to the resolved root, for display.
	pub relative: PathBuf,

	pub outcome: FileOutcome,
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
	/// The root after resolution to an absolute path.
	pub root: PathBuf,

	/// Candidate files visited, including failures.
	pub total: usize,

	/// Files whose content differed after rewriting.
	pub changed: usize,

	/// Files that could not be processed.
	pub failed: Vec<FileReport>,
}

impl RunSummary {
	/// `<changed>/<total> files modified`
	pub fn summary_line(&self) -> String {
		format!("{}/{} files modified", self.changed, self.total)
	}
}

/// Resolve `root` to an absolute directory path.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
	let resolved = root
		.canonicalize()
		.map_err(|source| RelinkError::RootNotFound {
			path: root.to_path_buf(),
			source,
		})?;

	if !resolved.is_dir() {
		return Err(RelinkError::RootNotDirectory { path: resolved });
	}

	Ok(resolved)
}

/// Rewrite every candidate file under the root, one at a time.
///
/// `on_file` sees each visited file as soon as it is processed. A per-file
/// failure is recorded and the run continues; a missing root or an
/// unreadable directory aborts with an error.
pub fn run(
	options: &RunOptions,
	table: &RuleTable,
	mut on_file: impl FnMut(&FileReport),
) -> Result<RunSummary> {
	let root = resolve_root(&options.root)?;
	let dry_run = options.mode == WriteMode::DryRun;
	tracing::info!(
		root = %root.display(),
		extension = %options.extension,
		rules = table.len(),
		dry_run,
		"starting run"
	);

	let mut summary = RunSummary {
		root: root.clone(),
		..Default::default()
	};

	for path in candidate_files(&root, &options.extension) {
		let path = path?;
		let outcome = rewrite_file(&path, table, options.mode);
		tracing::debug!(path = %path.display(), ?outcome, "visited");

		let report = FileReport {
			relative: path.strip_prefix(&root).unwrap_or(&path).to_path_buf(),
			path,
			outcome,
		};

		summary.total += 1;
		match report.outcome {
			FileOutcome::Changed => summary.changed += 1,
			FileOutcome::Unchanged => {}
			FileOutcome::Failed { .. } => summary.failed.push(report.clone()),
		}

		on_file(&report);
	}

	tracing::info!(
		total = summary.total,
		changed = summary.changed,
		failed = summary.failed.len(),
		"run complete"
	);

	Ok(summary)
}
