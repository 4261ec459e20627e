//! Error types for string scanning.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a binary dump into a string report.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The binary could not be read.
    #[error("Error processing file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The report could not be written.
    #[error("Error writing file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
