//! Per-source results of copy and move operations.

use std::path::{Path, PathBuf};

/// What happened to one source that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Contents were streamed into `target`.
    Copied {
        /// File (or device) that received the bytes
        target: PathBuf,
        /// Number of bytes written
        bytes: u64,
    },
    /// The source now lives at `target` and its old entry is gone.
    Moved {
        /// New directory entry
        target: PathBuf,
        /// True when the bytes were copied because linking crossed devices
        fallback: bool,
    },
    /// The target name was taken and overwriting was refused.
    Declined {
        /// Existing entry that was left untouched
        target: PathBuf,
    },
}

impl Outcome {
    /// Path the outcome refers to.
    #[must_use]
    pub fn target(&self) -> &Path {
        match self {
            Self::Copied { target, .. } | Self::Moved { target, .. } | Self::Declined { target } => {
                target
            }
        }
    }

    /// Whether the source was actually transferred.
    #[must_use]
    pub fn is_transferred(&self) -> bool {
        !matches!(self, Self::Declined { .. })
    }
}
