//! Path filtering logic for archive creation.
//!
//! Decides which files qualify for the archive and what name each one gets
//! inside it.

use crate::ArchiveError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Checks if a file name ends with one of the given extensions.
///
/// Only the file name component is inspected. The comparison is an exact,
/// case-sensitive suffix match on the raw name bytes, so names that are not
/// valid UTF-8 can still match.
///
/// # Examples
///
/// ```
/// use srcpack_core::creation::filters;
/// use std::path::Path;
///
/// let extensions = [".java".to_string(), ".md".to_string()];
///
/// assert!(filters::matches_extension(Path::new("src/Main.java"), &extensions));
/// assert!(filters::matches_extension(Path::new("README.md"), &extensions));
/// assert!(!filters::matches_extension(Path::new("Main.JAVA"), &extensions));
/// assert!(!filters::matches_extension(Path::new("notes.txt"), &extensions));
/// ```
#[must_use]
pub fn matches_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();

    extensions
        .iter()
        .map(AsRef::as_ref)
        .filter(|ext| !ext.is_empty())
        .any(|ext| name.ends_with(ext.as_bytes()))
}

/// Computes the archive path of `source_path` relative to `root`.
///
/// # Errors
///
/// Returns `InvalidPath` if the source path is not under the root directory
/// or the relative path contains anything other than normal components.
///
/// # Examples
///
/// ```
/// use srcpack_core::creation::filters;
/// use std::path::Path;
///
/// let root = Path::new("/home/user/CCRM_Project");
/// let source = Path::new("/home/user/CCRM_Project/src/Student.java");
///
/// let archive_path = filters::compute_archive_path(source, root).unwrap();
/// assert_eq!(archive_path, Path::new("src/Student.java"));
/// ```
pub fn compute_archive_path(source_path: &Path, root: &Path) -> Result<PathBuf> {
    let relative = source_path
        .strip_prefix(root)
        .map_err(|_| ArchiveError::InvalidPath {
            path: source_path.to_path_buf(),
        })?;

    // Only normal components may reach the archive
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ArchiveError::InvalidPath {
            path: source_path.to_path_buf(),
        });
    }

    Ok(relative.to_path_buf())
}

/// Normalizes a relative path for ZIP archive format.
///
/// ZIP requires `/` separators and UTF-8 names regardless of platform.
///
/// # Errors
///
/// Returns `InvalidPath` if the path is empty or not valid UTF-8.
///
/// # Examples
///
/// ```
/// use srcpack_core::creation::filters;
/// use std::path::Path;
///
/// let name = filters::normalize_zip_path(Path::new("sub/c.md")).unwrap();
/// assert_eq!(name, "sub/c.md");
/// ```
pub fn normalize_zip_path(path: &Path) -> Result<String> {
    let invalid = || ArchiveError::InvalidPath {
        path: path.to_path_buf(),
    };

    let parts = path
        .components()
        .map(|c| c.as_os_str().to_str().ok_or_else(invalid))
        .collect::<Result<Vec<_>>>()?;

    if parts.is_empty() {
        return Err(invalid());
    }

    Ok(parts.join("/"))
}
