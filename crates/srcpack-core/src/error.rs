//! Error types for archive build and listing operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while building or listing an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source path exists but is not a directory.
    #[error("source is not a directory: {path}")]
    NotADirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// Archive is corrupted or is not a ZIP container.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry path cannot be stored in a ZIP archive.
    #[error("invalid entry path: {path}")]
    InvalidPath {
        /// The path that could not be converted.
        path: PathBuf,
    },

    /// Compression level outside the supported range.
    #[error("invalid compression level {level}, must be 1-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl ArchiveError {
    /// Returns `true` if this error comes from the filesystem side: a missing
    /// or unreadable source, an unwritable output, or an unopenable archive.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcpack_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::SourceNotFound {
    ///     path: PathBuf::from("missing"),
    /// };
    /// assert!(err.is_io_error());
    /// assert!(!err.is_format_error());
    /// ```
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::SourceNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::InvalidPath { .. }
        )
    }

    /// Returns `true` if the archive could not be parsed as a ZIP container.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcpack_core::ArchiveError;
    ///
    /// let err = ArchiveError::InvalidArchive("bad central directory".to_string());
    /// assert!(err.is_format_error());
    /// ```
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidArchive(_))
    }

    /// Maps a `zip` crate error into the archive error taxonomy.
    ///
    /// I/O failures stay I/O errors; everything else is a format error with
    /// `context` prefixed to the message.
    pub(crate) fn from_zip(err: zip::result::ZipError, context: &str) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::InvalidArchive(format!("{context}: {other}")),
        }
    }
}
