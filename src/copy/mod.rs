//! Block-streamed file copy.
//!
//! This module provides the copier: validation of source and destination,
//! the overwrite confirmation, and the read/write loop.

mod file;
pub(crate) mod utils;

// Re-export public API
pub use file::copy_file;
