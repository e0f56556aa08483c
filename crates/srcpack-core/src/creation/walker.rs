//! Directory tree walking with extension filtering.
//!
//! The walk is depth-first with siblings sorted by file name, so the same
//! filesystem state always yields the same sequence of files.

use crate::ArchiveConfig;
use crate::ArchiveError;
use crate::Result;
use crate::creation::filters;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a source directory and yields the files that qualify for the
/// archive.
///
/// Directories are descended but never yielded. A symlink is yielded when it
/// resolves to a regular file; symlinked directories are only descended when
/// `follow_symlinks` is set.
///
/// # Examples
///
/// ```no_run
/// use srcpack_core::ArchiveConfig;
/// use srcpack_core::creation::walker::SourceWalker;
/// use std::path::Path;
///
/// let config = ArchiveConfig::default();
/// let walker = SourceWalker::new(Path::new("CCRM_Project"), &config);
///
/// for file in walker.walk() {
///     let file = file.unwrap();
///     println!("Would add: {}", file.archive_name);
/// }
/// ```
pub struct SourceWalker<'a> {
    root: &'a Path,
    config: &'a ArchiveConfig,
}

impl<'a> SourceWalker<'a> {
    /// Creates a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a ArchiveConfig) -> Self {
        Self { root, config }
    }

    /// Returns an iterator over qualifying files.
    ///
    /// # Errors
    ///
    /// Items are errors when a directory cannot be read, a symlink target
    /// cannot be resolved, or an entry path cannot be stored in a ZIP.
    pub fn walk(&self) -> impl Iterator<Item = Result<SourceFile>> + '_ {
        WalkDir::new(self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.build_source_file(&entry).transpose(),
                Err(e) => Some(Err(walk_error(&e))),
            })
    }

    /// Builds a `SourceFile` from a `walkdir::DirEntry`.
    ///
    /// Returns `Ok(None)` for directories, special files and files whose
    /// name does not end with a configured extension.
    fn build_source_file(&self, entry: &walkdir::DirEntry) -> Result<Option<SourceFile>> {
        let file_type = entry.file_type();
        if file_type.is_dir() {
            return Ok(None);
        }

        let path = entry.path();
        if !filters::matches_extension(path, &self.config.extensions) {
            return Ok(None);
        }

        let metadata = if file_type.is_symlink() {
            fs::metadata(path).map_err(|e| {
                ArchiveError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot resolve symlink {}: {e}", path.display()),
                ))
            })?
        } else {
            entry.metadata().map_err(|e| walk_error(&e))?
        };

        if !metadata.is_file() {
            return Ok(None);
        }

        let archive_path = filters::compute_archive_path(path, self.root)?;
        let archive_name = filters::normalize_zip_path(&archive_path)?;

        Ok(Some(SourceFile {
            path: path.to_path_buf(),
            archive_path,
            archive_name,
            size: metadata.len(),
        }))
    }
}

/// A file selected for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full filesystem path to the file.
    pub path: PathBuf,

    /// Path relative to the source directory.
    pub archive_path: PathBuf,

    /// Entry name stored in the ZIP (`/`-separated, UTF-8).
    pub archive_name: String,

    /// Size in bytes at walk time.
    pub size: u64,
}

/// Result of collecting the source tree.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    /// Files to archive, in walk order.
    pub files: Vec<SourceFile>,

    /// Paths skipped because they could not be read, as messages.
    pub skipped: Vec<String>,
}

/// Collects every qualifying file under `root` in a single pass.
///
/// The root itself must exist, be a directory and be readable regardless of
/// `skip_unreadable`. Below the root, unreadable paths abort the collection
/// unless `skip_unreadable` is set, in which case they are recorded in
/// `SourceSet::skipped`.
///
/// # Examples
///
/// ```no_run
/// use srcpack_core::ArchiveConfig;
/// use srcpack_core::creation::walker::collect_sources;
/// use std::path::Path;
///
/// let config = ArchiveConfig::default();
/// let sources = collect_sources(Path::new("CCRM_Project"), &config)?;
/// println!("Total files: {}", sources.files.len());
/// # Ok::<(), srcpack_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist (`SourceNotFound`)
/// - `root` is not a directory (`NotADirectory`)
/// - the traversal fails and `skip_unreadable` is not set
pub fn collect_sources(root: &Path, config: &ArchiveConfig) -> Result<SourceSet> {
    let metadata = fs::metadata(root).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ArchiveError::SourceNotFound {
                path: root.to_path_buf(),
            }
        } else {
            root_error(root, &e)
        }
    })?;

    if !metadata.is_dir() {
        return Err(ArchiveError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    // Fail on an unreadable root even when skipping is enabled
    fs::read_dir(root).map_err(|e| root_error(root, &e))?;

    let mut set = SourceSet::default();
    for item in SourceWalker::new(root, config).walk() {
        match item {
            Ok(file) => set.files.push(file),
            Err(e) if config.skip_unreadable && e.is_io_error() => {
                set.skipped.push(e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(set)
}

/// Wraps a failure on the source root itself with the root's path.
fn root_error(root: &Path, err: &io::Error) -> ArchiveError {
    ArchiveError::Io(io::Error::new(
        err.kind(),
        format!("cannot read source {}: {err}", root.display()),
    ))
}

/// Converts a walkdir error, keeping the underlying I/O error kind.
fn walk_error(err: &walkdir::Error) -> ArchiveError {
    let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
    let message = err.path().map_or_else(
        || format!("walkdir error: {err}"),
        |path| format!("cannot read {}: {err}", path.display()),
    );
    ArchiveError::Io(io::Error::new(kind, message))
}
