//! Target path construction and identity checks.

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Final component of `source`.
///
/// # Errors
///
/// Returns [`Error::NoFileName`] for paths such as `/` or `..` that have no
/// final component.
pub(crate) fn file_name(source: &Path) -> Result<&OsStr> {
    source
        .file_name()
        .ok_or_else(|| Error::NoFileName(source.to_path_buf()))
}

/// Build the path a source lands at inside `destination`.
///
/// The target is `destination` joined with the final component of
/// `source`, so `a/b/report.txt` into `/tmp/out` becomes
/// `/tmp/out/report.txt`.
pub(crate) fn target_path(source: &Path, destination: &Path) -> Result<PathBuf> {
    Ok(destination.join(file_name(source)?))
}

/// Check whether `target` names the same file as `source`.
///
/// Textually identical paths always match. Otherwise both must exist and
/// resolve to the same file, which catches `copy a.txt .` and similar.
pub(crate) fn is_same_file(source: &Path, target: &Path) -> bool {
    if source == target {
        return true;
    }
    match (file_key(source), file_key(target)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Get a unique key for a file based on device and inode.
///
/// On non-Unix, falls back to the canonicalized path.
#[cfg(unix)]
fn file_key(path: &Path) -> Option<(u64, u64)> {
    use std::os::unix::fs::MetadataExt;
    let meta = fs::metadata(path).ok()?;
    Some((meta.dev(), meta.ino()))
}

#[cfg(not(unix))]
fn file_key(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok()
}
