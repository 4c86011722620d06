//! Error types for font opening.

use std::path::PathBuf;

use read_fonts::ReadError;

/// Result type for font opening operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening a font file.
///
/// Each variant keeps the underlying engine error as its source so
/// callers can inspect the raw failure code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read at all.
    #[error("Cannot open font file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a recognized font container.
    #[error("Unknown font format in '{path}': {source}")]
    UnsupportedFormat { path: PathBuf, source: ReadError },

    /// The container was recognized but its contents are malformed.
    #[error("Broken font file '{path}': {source}")]
    CorruptFont { path: PathBuf, source: ReadError },

    /// Engine failure not covered by the other variants.
    #[error("Unable to load font file '{path}': {source}")]
    LoadFailed { path: PathBuf, source: ReadError },
}

impl Error {
    /// Path of the file that failed to open.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Unreadable { path, .. }
            | Error::UnsupportedFormat { path, .. }
            | Error::CorruptFont { path, .. }
            | Error::LoadFailed { path, .. } => path,
        }
    }
}
