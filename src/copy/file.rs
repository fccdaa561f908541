//! Single file copy into a destination directory or device.

use crate::confirm::Confirm;
use crate::error::{Error, Result};
use crate::options::TransferOptions;
use crate::outcome::Outcome;
use crate::utils::path::{file_name, is_same_file, target_path};
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(feature = "tracing")]
use super::utils::describe;
use super::utils::{DestinationKind, StreamError, destination_kind, stream_blocks};

/// Copy `source` into `destination` under its own file name.
///
/// The contents are read and written in blocks of
/// [`TransferOptions::block_size`] bytes. A new target gets
/// [`TransferOptions::file_mode`]; an existing one is truncated, but only
/// after `confirm` agreed to overwrite it.
///
/// When `destination` is a character or block device, the bytes are written
/// to the device itself and no confirmation is asked. A copier that only
/// lists directories would instead stop with "unable to read directory"
/// for such a destination.
///
/// Both handles are owned by this function and closed on every return path.
///
/// # Returns
///
/// [`Outcome::Copied`] with the byte count, or [`Outcome::Declined`] if the
/// overwrite was refused.
///
/// # Errors
///
/// Recoverable (the caller may continue with other sources):
/// - [`Error::SelfCopy`] if the target is the source itself
/// - [`Error::OpenSource`] if the source cannot be opened
/// - [`Error::Prompt`] if the confirmation could not be read
/// - [`Error::CreateTarget`], [`Error::Read`], [`Error::Write`] on I/O failure
///   (a partially written target is left behind)
///
/// Fatal:
/// - [`Error::NotRegularFile`] if the source is not a regular file
/// - [`Error::InvalidCopyDestination`] if the destination is neither a
///   directory nor a device
/// - [`Error::UnreadableDestination`] if the destination cannot be inspected
///   or listed
pub fn copy_file(
    source: &Path,
    destination: &Path,
    options: &TransferOptions,
    confirm: &mut dyn Confirm,
) -> Result<Outcome> {
    let name = file_name(source)?;
    let target = target_path(source, destination)?;
    if is_same_file(source, &target) {
        return Err(Error::SelfCopy(source.to_path_buf()));
    }

    let mut src_file = File::open(source).map_err(|e| Error::OpenSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    // fstat on the open handle: a symlink source is judged by its target
    let src_meta = src_file.metadata().map_err(|e| Error::SourceMetadata {
        path: source.to_path_buf(),
        source: e,
    })?;
    if !src_meta.is_file() {
        return Err(Error::NotRegularFile(source.to_path_buf()));
    }
    log_debug!(source = %source.display(), len = src_meta.len(), "source is a regular file");

    let dst_meta = fs::metadata(destination).map_err(|e| Error::UnreadableDestination {
        path: destination.to_path_buf(),
        source: e,
    })?;
    let kind = destination_kind(&dst_meta)
        .ok_or_else(|| Error::InvalidCopyDestination(destination.to_path_buf()))?;
    log_debug!(
        destination = %destination.display(),
        kind = describe(&dst_meta.file_type()),
        "destination accepted"
    );

    let (mut dst_file, written_to) = match kind {
        DestinationKind::Directory => {
            if contains_entry(destination, name)? {
                let accepted =
                    confirm
                        .confirm_overwrite(&target)
                        .map_err(|e| Error::Prompt {
                            path: target.clone(),
                            source: e,
                        })?;
                if !accepted {
                    log_debug!(path = %target.display(), "overwrite declined");
                    return Ok(Outcome::Declined { target });
                }
            }
            (create_target(&target, options.file_mode)?, target)
        }
        DestinationKind::Device => {
            let device = OpenOptions::new()
                .write(true)
                .open(destination)
                .map_err(|e| Error::CreateTarget {
                    path: destination.to_path_buf(),
                    source: e,
                })?;
            (device, destination.to_path_buf())
        }
    };

    let bytes = stream_blocks(&mut src_file, &mut dst_file, options.block_size).map_err(
        |e| match e {
            StreamError::Read(e) => Error::Read {
                path: source.to_path_buf(),
                source: e,
            },
            StreamError::Write(e) => Error::Write {
                path: written_to.clone(),
                source: e,
            },
        },
    )?;
    log_debug!(path = %written_to.display(), bytes, "copy complete");

    Ok(Outcome::Copied {
        target: written_to,
        bytes,
    })
}

/// Scan `dir` for an entry called exactly `name`.
fn contains_entry(dir: &Path, name: &OsStr) -> Result<bool> {
    let unreadable = |e: io::Error| Error::UnreadableDestination {
        path: dir.to_path_buf(),
        source: e,
    };
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        if entry.map_err(unreadable)?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Open the target for writing, creating it with `mode` or truncating it.
fn create_target(target: &Path, mode: u32) -> Result<File> {
    let mut open = OpenOptions::new();
    open.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    open.open(target).map_err(|e| Error::CreateTarget {
        path: target.to_path_buf(),
        source: e,
    })
}

// =============================================================================
// Tests
// =============================================================================
