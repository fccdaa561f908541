//! Move by hard link.
//!
//! A move creates a second directory entry for the source inside the
//! destination and then removes the original entry. No bytes are copied,
//! which requires both paths to live on the same filesystem. With
//! [`TransferOptions::cross_device_fallback`] a cross-device move streams
//! the bytes instead.

use crate::copy::utils::{StreamError, stream_blocks};
use crate::error::{Error, Result, is_cross_device_error};
use crate::options::TransferOptions;
use crate::outcome::Outcome;
use crate::utils::path::target_path;
use std::fs::{self, File, Metadata, OpenOptions};
use std::path::Path;

/// Move `source` into the directory `destination` under its own file name.
///
/// # Errors
///
/// Recoverable:
/// - [`Error::SourceMetadata`] / [`Error::DestinationMetadata`] if either path
///   cannot be inspected (for example because it does not exist)
/// - [`Error::Link`] if the hard link cannot be created: the target exists,
///   permission is denied, or the paths are on different filesystems and the
///   fallback is disabled
/// - [`Error::Fallback`] if the cross-device copy failed (the partial target
///   is removed again)
///
/// Fatal:
/// - [`Error::NotRegularFile`] if the source is not a regular file
/// - [`Error::InvalidMoveDestination`] if the destination is not a directory
/// - [`Error::Unlink`] if the source could not be removed after the target
///   was created. Both entries then reference the same data.
pub fn move_file(source: &Path, destination: &Path, options: &TransferOptions) -> Result<Outcome> {
    let target = target_path(source, destination)?;

    let src_meta = fs::metadata(source).map_err(|e| Error::SourceMetadata {
        path: source.to_path_buf(),
        source: e,
    })?;
    if !src_meta.is_file() {
        return Err(Error::NotRegularFile(source.to_path_buf()));
    }
    log_debug!(source = %source.display(), "source is a regular file");

    let dst_meta = fs::metadata(destination).map_err(|e| Error::DestinationMetadata {
        path: destination.to_path_buf(),
        source: e,
    })?;
    if !dst_meta.is_dir() {
        return Err(Error::InvalidMoveDestination(destination.to_path_buf()));
    }
    log_debug!(destination = %destination.display(), "destination is a directory");

    let fallback = match fs::hard_link(source, &target) {
        Ok(()) => {
            log_debug!(path = %target.display(), "hard link created");
            false
        }
        Err(e) if options.cross_device_fallback && is_cross_device_error(&e) => {
            log_debug!(path = %target.display(), "cross-device move, copying instead");
            move_across(source, &target, &src_meta, options)?;
            true
        }
        Err(e) => {
            return Err(Error::Link {
                path: source.to_path_buf(),
                destination: destination.to_path_buf(),
                source: e,
            });
        }
    };

    if let Err(e) = fs::remove_file(source) {
        log_warn!(
            source = %source.display(),
            link = %target.display(),
            "source still linked after failed unlink"
        );
        return Err(Error::Unlink {
            path: source.to_path_buf(),
            target,
            source: e,
        });
    }

    Ok(Outcome::Moved { target, fallback })
}

/// Cross-device half of a move: copy the bytes, reporting any failure as
/// [`Error::Fallback`].
fn move_across(
    source: &Path,
    target: &Path,
    src_meta: &Metadata,
    options: &TransferOptions,
) -> Result<u64> {
    copy_across(source, target, src_meta, options).map_err(|e| Error::Fallback {
        path: source.to_path_buf(),
        source: Box::new(e),
    })
}

/// Stream `source` into a brand new `target`, removing it again on failure.
///
/// The target takes the source's permission bits and must not exist yet.
fn copy_across(
    source: &Path,
    target: &Path,
    src_meta: &Metadata,
    options: &TransferOptions,
) -> Result<u64> {
    let mut src_file = File::open(source).map_err(|e| Error::OpenSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut open = OpenOptions::new();
    open.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        open.mode(src_meta.permissions().mode() & 0o7777);
    }
    #[cfg(not(unix))]
    let _ = src_meta;

    let mut dst_file = open.open(target).map_err(|e| Error::CreateTarget {
        path: target.to_path_buf(),
        source: e,
    })?;

    match stream_blocks(&mut src_file, &mut dst_file, options.block_size) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            drop(dst_file);
            // Best effort: the stream error is what gets reported
            let _ = fs::remove_file(target);
            Err(match e {
                StreamError::Read(e) => Error::Read {
                    path: source.to_path_buf(),
                    source: e,
                },
                StreamError::Write(e) => Error::Write {
                    path: target.to_path_buf(),
                    source: e,
                },
            })
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
