//! Utility functions for file copy operations.
//!
//! This module contains the block streaming loop and the file type checks
//! used by the copier and by the mover's cross-device fallback.

use std::fs::{FileType, Metadata};
use std::io::{self, Read, Write};

// =============================================================================
// File content copying
// =============================================================================

/// Which side of a block transfer failed.
#[derive(Debug)]
pub(crate) enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

/// Copy `reader` into `writer` one block at a time until end of file.
///
/// Each iteration issues a single `read` of at most `block_size` bytes and
/// writes exactly what was read. Interrupted reads are retried; any other
/// failure stops the transfer and leaves whatever was written in place.
///
/// Returns the number of bytes written.
pub(crate) fn stream_blocks<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    block_size: usize,
) -> Result<u64, StreamError> {
    let mut buf = vec![0u8; block_size.max(1)];
    let mut copied: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Read(e)),
        };
        writer.write_all(&buf[..n]).map_err(StreamError::Write)?;
        copied += n as u64;
    }

    Ok(copied)
}

// =============================================================================
// File type checks
// =============================================================================

/// Where a copy writes its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DestinationKind {
    /// A directory: the target is a new entry inside it
    Directory,
    /// A character or block device: the device itself receives the bytes
    Device,
}

/// Classify a copy destination, or `None` if it cannot receive a copy.
pub(crate) fn destination_kind(meta: &Metadata) -> Option<DestinationKind> {
    let ft = meta.file_type();
    if ft.is_dir() {
        Some(DestinationKind::Directory)
    } else if is_device(&ft) {
        Some(DestinationKind::Device)
    } else {
        None
    }
}

#[cfg(unix)]
#[inline]
fn is_device(ft: &FileType) -> bool {
    use std::os::unix::fs::FileTypeExt;
    ft.is_char_device() || ft.is_block_device()
}

#[cfg(not(unix))]
#[inline]
fn is_device(_ft: &FileType) -> bool {
    false
}

/// Human-readable name of a file type for log output.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn describe(ft: &FileType) -> &'static str {
    if ft.is_file() {
        return "regular file";
    }
    if ft.is_dir() {
        return "directory";
    }
    if ft.is_symlink() {
        return "symbolic link";
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if ft.is_char_device() {
            return "character device";
        }
        if ft.is_block_device() {
            return "block device";
        }
        if ft.is_fifo() {
            return "fifo";
        }
        if ft.is_socket() {
            return "socket";
        }
    }
    "special file"
}

// =============================================================================
// Tests
// =============================================================================
