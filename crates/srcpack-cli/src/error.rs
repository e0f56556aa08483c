//! Error conversion utilities for CLI.
//!
//! Turns srcpack-core's typed errors into anyhow errors that name the file
//! involved and, where the user can do something about it, carry a hint.

use anyhow::anyhow;
use srcpack_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to a user-facing anyhow error.
///
/// `subject` is the archive being written or read. It labels archive and
/// entry-path errors; I/O errors keep the path the core attached.
pub fn convert_archive_error(err: ArchiveError, subject: &Path) -> anyhow::Error {
    match err {
        ArchiveError::SourceNotFound { path } => {
            anyhow!(
                "Source directory '{}' does not exist\n\
                 HINT: Run srcpack next to the project directory or pass --source DIR.",
                path.display()
            )
        }
        ArchiveError::NotADirectory { path } => {
            anyhow!(
                "Source '{}' is not a directory\n\
                 HINT: Pass the project root with --source DIR.",
                path.display()
            )
        }
        ArchiveError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The file may be corrupted or may not be a ZIP archive.",
                subject.display(),
                reason
            )
        }
        ArchiveError::InvalidPath { path } => {
            anyhow!(
                "Cannot store '{}' in '{}'\n\
                 HINT: File names must be valid UTF-8.",
                path.display(),
                subject.display()
            )
        }
        ArchiveError::InvalidCompressionLevel { level } => {
            anyhow!(
                "Invalid compression level {level}\n\
                 HINT: Use -l with a value from 1 to 9."
            )
        }
        // Core I/O errors already name the file they failed on
        ArchiveError::Io(io_err) => anyhow!("I/O error: {io_err}"),
    }
}

/// Maps a core result's error through [`convert_archive_error`].
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    subject: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, subject))
}
