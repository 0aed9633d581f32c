//! File I/O primitives with consistent error mapping.

use crate::error::{RelinkError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
	fs::read_to_string(path).map_err(|source| RelinkError::ReadFile {
		path: path.to_path_buf(),
		source,
	})
}

/// Replace `path` with `content` atomically (write a sibling temp file, then rename).
///
/// The target must itself be writable: a file the caller could not write
/// in place is refused even when its directory is writable. The temp file
/// gets a fresh unique name, so no existing file is ever overwritten, and
/// the original permissions are carried over. On failure the temp file is
/// removed and the original is left as it was.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
	replace_file(path, content).map_err(|source| RelinkError::WriteFile {
		path: path.to_path_buf(),
		source,
	})
}

fn replace_file(path: &Path, content: &str) -> io::Result<()> {
	// Opening for write (without truncating) checks access without modifying anything.
	drop(OpenOptions::new().write(true).open(path)?);
	let permissions = fs::metadata(path)?.permissions();

	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut tmp = tempfile::Builder::new()
		.prefix(".relink-")
		.suffix(".tmp")
		.tempfile_in(dir)?;

	tmp.write_all(content.as_bytes())?;
	tmp.as_file().set_permissions(permissions)?;
	tmp.persist(path).map_err(|e| e.error)?;

	Ok(())
}
