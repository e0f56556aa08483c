//! Archive creation module.
//!
//! Walks a source directory, keeps files with the configured extensions and
//! writes them into a deflate-compressed ZIP under their relative paths.

pub mod filters;
pub mod walker;

pub mod report;
pub mod zip;

// Re-exports for public API
pub use report::BuildReport;
pub use walker::SourceFile;
pub use walker::SourceSet;
pub use walker::SourceWalker;
pub use self::zip::build_archive;
pub use self::zip::build_archive_with_progress;
