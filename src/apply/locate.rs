//! Key-token to file resolution

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve a key token to the file it names: `<dir>/<key>.<ext>` for any
/// extension.
///
/// The directory is enumerated in lexicographic file-name order and the
/// first file whose stem equals the key wins, so ties between `12.mp3`
/// and `12.m4a` always resolve the same way. Files without an extension
/// never match (the contract is `<key>.*`). Returns `None` when nothing
/// matches.
pub fn resolve_track_file(dir: &Path, key: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.into_path())
        .find(|path| {
            path.is_file()
                && path.extension().is_some()
                && path.file_stem() == Some(OsStr::new(key))
        })
}
