//! Candidate file discovery.

use crate::error::{RelinkError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily yield every regular file under `root` whose name ends with `extension`.
///
/// Symbolic links are neither followed nor yielded, so nothing outside
/// `root` is ever produced. Order follows directory enumeration.
///
/// An unreadable directory yields an `Err` item; callers treat it as fatal.
pub fn candidate_files<'a>(
	root: &Path,
	extension: &'a str,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
	WalkDir::new(root)
		.follow_links(false)
		.into_iter()
		.filter_map(move |entry| match entry {
			Ok(entry) => {
				let wanted = entry.file_type().is_file()
					&& entry.file_name().to_string_lossy().ends_with(extension);
				wanted.then(|| Ok(entry.into_path()))
			}
			Err(source) => {
				let path = source
					.path()
					.map(Path::to_path_buf)
					.unwrap_or_default();
				Some(Err(RelinkError::Walk { path, source }))
			}
		})
}
