//! Packs a source tree into a deflate-compressed ZIP archive and reads back
//! its manifest.
//!
//! `srcpack-core` walks a directory, keeps the files whose names end with
//! one of the configured extensions, stores them under their paths relative
//! to that directory and lists the resulting archive's entries.
//!
//! # Examples
//!
//! ```no_run
//! use srcpack_core::ArchiveConfig;
//! use srcpack_core::build_archive;
//! use srcpack_core::list_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ArchiveConfig::default();
//! let report = build_archive("CCRM_Project", "CCRM_Java_Source_Files.zip", &config)?;
//! println!("Added {} files", report.files_added);
//!
//! let manifest = list_archive("CCRM_Java_Source_Files.zip")?;
//! for name in manifest.entry_names() {
//!     println!("  {name}");
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod creation;
pub mod error;
pub mod inspection;
pub mod progress;

// Re-export main API types
pub use config::ArchiveConfig;
pub use config::DEFAULT_ARCHIVE_NAME;
pub use config::DEFAULT_EXTENSIONS;
pub use config::DEFAULT_SOURCE_DIR;
pub use creation::BuildReport;
pub use creation::build_archive;
pub use creation::build_archive_with_progress;
pub use error::ArchiveError;
pub use error::Result;
pub use inspection::ArchiveManifest;
pub use inspection::ManifestCompression;
pub use inspection::ManifestEntry;
pub use inspection::list_archive;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
