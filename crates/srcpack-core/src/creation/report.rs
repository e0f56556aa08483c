//! Archive build reporting.

use std::time::Duration;

/// Report of an archive build.
///
/// # Examples
///
/// ```
/// use srcpack_core::BuildReport;
///
/// let mut report = BuildReport::default();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Number of files added to the archive.
    pub files_added: usize,

    /// Total source bytes written into the archive (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive file on disk.
    pub bytes_compressed: u64,

    /// Duration of the build.
    pub duration: Duration,

    /// Number of files skipped because they could not be read.
    pub files_skipped: usize,

    /// Warnings generated during the build.
    pub warnings: Vec<String>,
}

impl BuildReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either side is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the compression percentage (space saved).
    ///
    /// Returns 0.0 if nothing was written or the archive is larger than its
    /// contents, which is common for small files because of ZIP headers.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        if self.bytes_compressed == 0 {
            return 100.0;
        }
        let saved = self.bytes_written.saturating_sub(self.bytes_compressed);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_default() {
        let report = BuildReport::default();
        assert_eq!(report.files_added, 0);
        assert_eq!(report.bytes_written, 0);
        assert_eq!(report.bytes_compressed, 0);
        assert_eq!(report.duration, Duration::default());
        assert_eq!(report.files_skipped, 0);
        assert!(!report.has_warnings());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_build_report_compression_ratio() {
        let mut report = BuildReport::new();

        report.bytes_written = 1000;
        report.bytes_compressed = 500;
        assert_eq!(report.compression_ratio(), 2.0);

        // Expansion
        report.bytes_written = 500;
        report.bytes_compressed = 1000;
        assert_eq!(report.compression_ratio(), 0.5);

        report.bytes_compressed = 0;
        assert_eq!(report.compression_ratio(), 0.0);

        report.bytes_written = 0;
        report.bytes_compressed = 500;
        assert_eq!(report.compression_ratio(), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_build_report_compression_percentage() {
        let mut report = BuildReport::new();

        report.bytes_written = 1000;
        report.bytes_compressed = 250;
        assert_eq!(report.compression_percentage(), 75.0);

        report.bytes_written = 500;
        report.bytes_compressed = 1000;
        assert_eq!(report.compression_percentage(), 0.0);

        report.bytes_written = 1000;
        report.bytes_compressed = 0;
        assert_eq!(report.compression_percentage(), 100.0);

        report.bytes_written = 0;
        assert_eq!(report.compression_percentage(), 0.0);
    }

    #[test]
    fn test_build_report_warnings() {
        let mut report = BuildReport::new();
        report.add_warning("Skipped unreadable file: a.java");
        report.add_warning(String::from("Skipped unreadable file: b.md"));

        assert!(report.has_warnings());
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.warnings[1], "Skipped unreadable file: b.md");
    }
}
