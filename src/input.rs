//! Wordlist discovery
//!
//! Finds the wordlist files directly inside a directory.

use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix a file name must end with to be picked up as a wordlist
pub const WORDLIST_SUFFIX: &str = ".txt";

/// Collect the wordlists directly inside `dir` (non-recursive), sorted by file name.
///
/// Only regular files whose name ends in `.txt` (case-sensitive) are returned,
/// dot-files included.
pub fn collect_wordlists(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to scan directory {:?}", dir))?;
        let path = entry.path();

        if path.is_file() && is_wordlist(path) {
            files.push(path.to_path_buf());
        }
    }

    log::debug!("Found {} wordlists in {:?}", files.len(), dir);
    Ok(files)
}

/// Check whether a path looks like a wordlist by its name
pub fn is_wordlist(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(WORDLIST_SUFFIX))
        .unwrap_or(false)
}
