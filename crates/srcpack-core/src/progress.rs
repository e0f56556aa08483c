//! Progress reporting hooks for archive building.

use std::path::Path;

/// Callback trait for progress reporting during archive building.
///
/// The trait requires `Send` so a callback can be moved to another thread.
///
/// # Examples
///
/// ```
/// use srcpack_core::ProgressCallback;
/// use std::path::Path;
///
/// struct SimpleProgress;
///
/// impl ProgressCallback for SimpleProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("Archive finished");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before a file is added.
    ///
    /// # Arguments
    ///
    /// * `path` - Archive path of the file
    /// * `total` - Total number of files to add
    /// * `current` - Current file number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of source bytes fed to the compressor.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after a file has been added.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once the central directory has been written.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
