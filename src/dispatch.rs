//! Operation selection and batch processing.
//!
//! The same program serves as both `copy` and `move`; which one runs is
//! decided by the name it was invoked under. A batch then applies the
//! operation to every positional path but the last, in order, with the last
//! path as the destination.

use crate::confirm::Confirm;
use crate::copy::copy_file;
use crate::error::Result;
use crate::options::TransferOptions;
use crate::outcome::Outcome;
use crate::relocate::move_file;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The two operations a batch can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Stream contents into the destination
    Copy,
    /// Hard link into the destination and unlink the source
    Move,
}

impl Operation {
    /// Pick the operation from the program's invocation path.
    ///
    /// Only the final component counts, so `./copy` and `/usr/bin/copy`
    /// both select [`Operation::Copy`]. A trailing `.exe` is ignored.
    /// Any other name yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use cpmv::Operation;
    ///
    /// assert_eq!(Operation::from_program_name("./move"), Some(Operation::Move));
    /// assert_eq!(Operation::from_program_name("cp"), None);
    /// ```
    pub fn from_program_name(program: impl AsRef<OsStr>) -> Option<Self> {
        let name = Path::new(program.as_ref()).file_name()?.to_str()?;
        match name.strip_suffix(".exe").unwrap_or(name) {
            "copy" => Some(Self::Copy),
            "move" => Some(Self::Move),
            _ => None,
        }
    }

    /// Command name of the operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Move => "moved",
        }
    }

    /// Apply the operation to one source.
    ///
    /// `confirm` is only consulted by [`Operation::Copy`].
    pub fn apply(
        self,
        source: &Path,
        destination: &Path,
        options: &TransferOptions,
        confirm: &mut dyn Confirm,
    ) -> Result<Outcome> {
        match self {
            Self::Copy => copy_file(source, destination, options, confirm),
            Self::Move => move_file(source, destination, options),
        }
    }
}

/// Counts for a batch in which every source was attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Sources copied or moved
    pub transferred: usize,
    /// Sources skipped because overwriting was refused
    pub declined: usize,
    /// Sources that failed with a recoverable error
    pub failed: usize,
}

/// Run `operation` over `paths`, the last of which is the destination.
///
/// Sources are processed strictly left to right. Each success prints
/// `<source> successfully copied to <destination>.` (or `moved`) on `out`;
/// declined overwrites and recoverable errors are reported on `err` and
/// the batch moves on. Fewer than two paths is a no-op.
///
/// Report streams are best effort: a failed write to `out` or `err` does
/// not interrupt the batch.
///
/// # Errors
///
/// Returns the first fatal error (see [`Error::is_fatal`](crate::Error::is_fatal)).
/// Sources after it are not attempted and the error itself is not written
/// to `err`.
pub fn run_batch<O: Write, E: Write>(
    operation: Operation,
    paths: &[PathBuf],
    options: &TransferOptions,
    confirm: &mut dyn Confirm,
    out: &mut O,
    err: &mut E,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let Some((destination, sources)) = paths.split_last() else {
        return Ok(summary);
    };

    for source in sources {
        match operation.apply(source, destination, options, confirm) {
            Ok(Outcome::Declined { target }) => {
                summary.declined += 1;
                let _ = writeln!(err, "No overwriting: {}", target.display());
            }
            Ok(_) => {
                summary.transferred += 1;
                let _ = writeln!(
                    out,
                    "{} successfully {} to {}.",
                    source.display(),
                    operation.past_tense(),
                    destination.display()
                );
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                summary.failed += 1;
                let _ = writeln!(err, "error: {}", e);
            }
        }
    }

    Ok(summary)
}
