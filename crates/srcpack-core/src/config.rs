//! Configuration for archive build operations.

use crate::ArchiveError;
use crate::Result;

/// Source directory scanned when no other directory is given.
pub const DEFAULT_SOURCE_DIR: &str = "CCRM_Project";

/// Archive file name written when no other output is given.
pub const DEFAULT_ARCHIVE_NAME: &str = "CCRM_Java_Source_Files.zip";

/// File name suffixes collected when no other extensions are given.
pub const DEFAULT_EXTENSIONS: [&str; 3] = [".java", ".md", ".csv"];

/// Configuration for building an archive from a source directory.
///
/// # Examples
///
/// ```
/// use srcpack_core::ArchiveConfig;
///
/// // Java sources, markdown and CSV files, deflate level 6
/// let config = ArchiveConfig::default();
///
/// let custom = ArchiveConfig::default()
///     .with_extensions(vec![".rs".to_string(), ".toml".to_string()])
///     .with_compression_level(9);
/// assert!(custom.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// File name suffixes to include.
    ///
    /// Matching is an exact, case-sensitive suffix match on the file name,
    /// so `".java"` matches `Main.java` but not `Main.JAVA`.
    ///
    /// Default: `[".java", ".md", ".csv"]`.
    pub extensions: Vec<String>,

    /// Deflate compression level (1-9).
    ///
    /// `None` uses the deflate default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Descend into symlinked directories.
    ///
    /// Symlinks to regular files are archived either way.
    ///
    /// Default: `false`.
    pub follow_symlinks: bool,

    /// Skip unreadable files and directories instead of aborting.
    ///
    /// Skipped paths are counted and reported as warnings.
    ///
    /// Default: `false`.
    pub skip_unreadable: bool,

    /// Store Unix permission bits for each entry.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,
}

impl Default for ArchiveConfig {
    /// Default values:
    /// - `extensions`: `[".java", ".md", ".csv"]`
    /// - `compression_level`: `Some(6)`
    /// - `follow_symlinks`: `false`
    /// - `skip_unreadable`: `false`
    /// - `preserve_permissions`: `true`
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            compression_level: Some(6),
            follow_symlinks: false,
            skip_unreadable: false,
            preserve_permissions: true,
        }
    }
}

impl ArchiveConfig {
    /// Creates a new `ArchiveConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file name suffixes to include.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the compression level is not in the range 1-9.
    /// Use `validate()` for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to descend into symlinked directories.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether unreadable paths are skipped instead of aborting.
    #[must_use]
    pub fn with_skip_unreadable(mut self, skip: bool) -> Self {
        self.skip_unreadable = skip;
        self
    }

    /// Sets whether to preserve permissions.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but not in range 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_config_default() {
        let config = ArchiveConfig::default();
        assert_eq!(config.extensions, vec![".java", ".md", ".csv"]);
        assert_eq!(config.compression_level, Some(6));
        assert!(!config.follow_symlinks);
        assert!(!config.skip_unreadable);
        assert!(config.preserve_permissions);
    }

    #[test]
    fn test_archive_config_builder() {
        let config = ArchiveConfig::new()
            .with_extensions(vec![".rs".to_string()])
            .with_compression_level(9)
            .with_follow_symlinks(true)
            .with_skip_unreadable(true)
            .with_preserve_permissions(false);

        assert_eq!(config.extensions, vec![".rs"]);
        assert_eq!(config.compression_level, Some(9));
        assert!(config.follow_symlinks);
        assert!(config.skip_unreadable);
        assert!(!config.preserve_permissions);
    }

    #[test]
    fn test_archive_config_validate_valid() {
        assert!(ArchiveConfig::default().validate().is_ok());
        assert!(
            ArchiveConfig::default()
                .with_compression_level(1)
                .validate()
                .is_ok()
        );

        let config = ArchiveConfig {
            compression_level: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_archive_config_validate_invalid() {
        for level in [0, 10] {
            let config = ArchiveConfig {
                compression_level: Some(level),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ArchiveError::InvalidCompressionLevel { level: l }) if l == level
            ));
        }
    }

    #[test]
    #[should_panic(expected = "compression level must be 1-9")]
    fn test_archive_config_builder_invalid_compression() {
        let _config = ArchiveConfig::default().with_compression_level(0);
    }
}
