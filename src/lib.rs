//! # cpmv
//!
//! Copy and move regular files into a destination directory using plain
//! file-system primitives.
//!
//! ## Core Features
//!
//! - **Block-streamed copy**: `open`/`read`/`write` in fixed-size blocks, no
//!   library copy routine
//! - **Hard-link move**: `link` + `unlink`, no bytes copied on the same volume
//! - **Overwrite confirmation**: pluggable [`Confirm`] strategy, with an
//!   interactive [`Prompt`] for terminals
//! - **Typed severity**: every [`Error`] says whether a batch may continue
//! - **Device destinations**: a copy can stream straight into a character or
//!   block device
//! - **Cross-device fallback**: opt-in copy-then-unlink for moves between
//!   filesystems
//!
//! ## Quick Start
//!
//! ```no_run
//! use cpmv::{Prompt, TransferOptions, copy_file, move_file};
//! use std::path::Path;
//!
//! let options = TransferOptions::default();
//! let mut prompt = Prompt::stdio();
//!
//! copy_file(Path::new("report.txt"), Path::new("/tmp/out"), &options, &mut prompt)?;
//! move_file(Path::new("data.bin"), Path::new("/tmp/out"), &options)?;
//! # Ok::<(), cpmv::Error>(())
//! ```
//!
//! ## Batches
//!
//! [`run_batch`] processes a `copy`/`move` style argument list, printing a
//! confirmation per source and stopping only on a fatal error:
//!
//! ```no_run
//! use cpmv::{Operation, Prompt, TransferOptions, run_batch};
//! use std::path::PathBuf;
//!
//! let paths = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt"), PathBuf::from("dest")];
//! let summary = run_batch(
//!     Operation::Copy,
//!     &paths,
//!     &TransferOptions::default(),
//!     &mut Prompt::stdio(),
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! )?;
//! println!("{} transferred, {} failed", summary.transferred, summary.failed);
//! # Ok::<(), cpmv::Error>(())
//! ```
//!
//! ## Error Severity
//!
//! | Severity | Effect on a batch | Examples |
//! |----------|-------------------|----------|
//! | [`Severity::Recoverable`] | next source is attempted | missing source, self-copy, link failure, I/O error |
//! | [`Severity::Fatal`] | batch stops | non-regular source, bad destination type, unlink failure |
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`TransferOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod log;

mod confirm;
mod copy;
mod dispatch;
mod error;
mod options;
mod outcome;
mod relocate;
mod utils;

pub use confirm::{Confirm, OVERWRITE_PROMPT, Prompt, accepts};
pub use copy::copy_file;
pub use dispatch::{BatchSummary, Operation, run_batch};
pub use error::{Error, Result, Severity, is_cross_device_error};
pub use options::{DEFAULT_BLOCK_SIZE, DEFAULT_FILE_MODE, TransferOptions};
pub use outcome::Outcome;
pub use relocate::move_file;
