//! Configuration options for copy and move operations.
//!
//! # Example
//!
//! ```
//! use cpmv::TransferOptions;
//!
//! let options = TransferOptions::default()
//!     .with_block_size(64 * 1024)
//!     .with_cross_device_fallback();
//! ```

/// Block size used when streaming file contents (the C library's `BUFSIZ`).
pub const DEFAULT_BLOCK_SIZE: usize = 8192;

/// Permission bits for files created by a copy: `rw-r--r--`.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Options for copy and move operations.
///
/// Use [`Default::default()`] to get the standard behavior, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `block_size` | 8192 | Bytes per read/write call |
/// | `file_mode` | `0o644` | Mode for newly created copies |
/// | `cross_device_fallback` | `false` | Copy + unlink when a move cannot link |
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferOptions {
    /// Number of bytes moved per read/write call (default: 8192)
    pub block_size: usize,

    /// Permission bits for files the copier creates (default: `0o644`)
    ///
    /// The process umask still applies. Existing files keep their mode
    /// when overwritten.
    pub file_mode: u32,

    /// Fall back to copy-then-unlink when a move crosses filesystems
    /// (default: false)
    ///
    /// Without this, a move whose hard link fails with `EXDEV` is reported
    /// as a [`Link`](crate::Error::Link) error.
    pub cross_device_fallback: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            file_mode: DEFAULT_FILE_MODE,
            cross_device_fallback: false,
        }
    }
}

impl TransferOptions {
    /// Set the streaming block size
    ///
    /// Value is clamped to at least 1.
    #[must_use]
    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size.max(1);
        self
    }

    /// Set the mode for newly created copies
    #[must_use]
    pub fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode & 0o7777;
        self
    }

    /// Enable the copy-then-unlink fallback for cross-device moves
    #[must_use]
    pub fn with_cross_device_fallback(mut self) -> Self {
        self.cross_device_fallback = true;
        self
    }
}
