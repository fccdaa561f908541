//! Error types for cpmv.
//!
//! This module provides the [`Error`] enum containing every failure a copy or
//! move can report, the [`Severity`] that tells a batch whether it may go on
//! to the next source, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Severity | Errors |
//! |----------|--------|
//! | Recoverable | [`Error::NoFileName`], [`Error::SelfCopy`], [`Error::OpenSource`], [`Error::SourceMetadata`], [`Error::DestinationMetadata`], [`Error::CreateTarget`], [`Error::Read`], [`Error::Write`], [`Error::Prompt`], [`Error::Link`], [`Error::Fallback`] |
//! | Fatal | [`Error::NotRegularFile`], [`Error::InvalidCopyDestination`], [`Error::InvalidMoveDestination`], [`Error::UnreadableDestination`], [`Error::Unlink`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for cpmv operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// How far the effect of an error reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Only the current source is abandoned; a batch continues.
    Recoverable,
    /// The whole batch stops; remaining sources are not attempted.
    Fatal,
}

/// Check if an IO error indicates that a link crossed filesystem boundaries.
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `EXDEV` |
/// | Windows | `ERROR_NOT_SAME_DEVICE` (0x11) |
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use cpmv::is_cross_device_error;
///
/// let error = io::Error::new(io::ErrorKind::CrossesDevices, "cross-device link");
/// assert!(is_cross_device_error(&error));
/// ```
pub fn is_cross_device_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::CrossesDevices {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            return raw_error == libc::EXDEV;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_NOT_SAME_DEVICE: i32 = 17;
            return raw_error == ERROR_NOT_SAME_DEVICE;
        }
    }

    false
}

/// Errors that can occur during copy and move operations.
///
/// All errors carry the paths involved. Use [`Error::severity`] to decide
/// whether a batch may continue after the error.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Source path has no final component to name the target after
    #[error("Source has no file name: {0}")]
    NoFileName(PathBuf),

    /// Target path resolves to the source itself
    #[error("Cannot copy file to itself: {0}")]
    SelfCopy(PathBuf),

    /// Source could not be opened for reading
    #[error("Cannot open or find source file {path}: {source}")]
    OpenSource {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source metadata could not be read
    #[error("Cannot inspect source file {path}: {source}")]
    SourceMetadata {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source is a directory, device, socket or other non-regular entry
    #[error("The source file must be a regular file: {0}")]
    NotRegularFile(PathBuf),

    /// Copy destination is neither a directory nor a device
    #[error("The destination must be a directory or a device: {0}")]
    InvalidCopyDestination(PathBuf),

    /// Move destination is not a directory
    #[error("The destination must be a directory: {0}")]
    InvalidMoveDestination(PathBuf),

    /// Copy destination could not be inspected or listed
    #[error("Unable to read destination {path}: {source}")]
    UnreadableDestination {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Move destination metadata could not be read
    #[error("Cannot inspect destination {path}: {source}")]
    DestinationMetadata {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Target file could not be opened for writing
    #[error("Cannot create target file {path}: {source}")]
    CreateTarget {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Reading a block from the source failed
    #[error("Error in read from {path}: {source}")]
    Read {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Writing a block to the target failed
    ///
    /// The target is left partially written.
    #[error("Error in write to {path}: {source}")]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The overwrite confirmation could not be obtained
    #[error("Cannot ask for overwrite permission on {path}: {source}")]
    Prompt {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Creating the hard link at the target failed
    #[error("Can't link {path} into directory {destination}: {source}")]
    Link {
        /// Source path
        path: PathBuf,
        /// Destination directory
        destination: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Cross-device fallback copy failed; the partial target was removed
    #[error("Cross-device copy of {path} failed: {source}")]
    Fallback {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: Box<Error>,
    },

    /// Removing the source after linking failed
    ///
    /// Both the source and the target now reference the same data.
    #[error("Can't remove source file {path} (it is still linked at {target}): {source}")]
    Unlink {
        /// Source path
        path: PathBuf,
        /// Target path that was already created
        target: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    /// Whether this error ends only the current source or the whole batch.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::NotRegularFile(_)
            | Self::InvalidCopyDestination(_)
            | Self::InvalidMoveDestination(_)
            | Self::UnreadableDestination { .. }
            | Self::Unlink { .. } => Severity::Fatal,
            Self::NoFileName(_)
            | Self::SelfCopy(_)
            | Self::OpenSource { .. }
            | Self::SourceMetadata { .. }
            | Self::DestinationMetadata { .. }
            | Self::CreateTarget { .. }
            | Self::Read { .. }
            | Self::Write { .. }
            | Self::Prompt { .. }
            | Self::Link { .. }
            | Self::Fallback { .. } => Severity::Recoverable,
        }
    }

    /// Shorthand for `severity() == Severity::Fatal`.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}
