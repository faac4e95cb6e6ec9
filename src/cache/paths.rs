// Cache path utilities.
// Resolves the on-disk cache directory and maps cache keys to entry files.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/fbw-installer on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fbw-installer").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory holding one JSON file per cache key.
pub fn entries_dir(root: &Path) -> PathBuf {
    root.join("entries")
}

/// Path to the entry file for a cache key.
pub fn entry_path(root: &Path, key: &str) -> PathBuf {
    entries_dir(root).join(format!("{}.json", sanitize_key(key)))
}

/// Encode a cache key for use as a file name.
/// Percent-encoding keeps distinct keys in distinct files and leaves no path separators.
fn sanitize_key(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}
