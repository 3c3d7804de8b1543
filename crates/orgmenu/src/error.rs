//! Error handling for the orgmenu binary.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for generator operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while generating the menu script.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Errors surfaced by the host command boundary.
    #[error("Host command error: {0}")]
    Host(#[from] vim_cmd::Error),
    /// The custom entries file could not be parsed.
    #[error("Failed to parse custom entries at {path}: {message}")]
    CustomEntries {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser-supplied reason.
        message: String,
    },
}
