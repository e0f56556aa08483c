//! Archive manifest types.

/// Compression method recorded for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestCompression {
    /// No compression.
    Stored,

    /// Deflate.
    Deflated,

    /// Any other method, by its `zip` crate name.
    Other(String),
}

impl std::fmt::Display for ManifestCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stored => write!(f, "stored"),
            Self::Deflated => write!(f, "deflated"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// One entry read back from an archive's central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Stored entry name, exactly as recorded in the archive.
    pub name: String,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Compressed size in bytes.
    pub compressed_size: u64,

    /// Compression method.
    pub compression: ManifestCompression,

    /// Whether the entry is a directory record.
    pub is_dir: bool,

    /// CRC-32 of the uncompressed data.
    pub crc32: u32,
}

/// Ordered list of archive entries with totals.
///
/// # Examples
///
/// ```
/// use srcpack_core::ArchiveManifest;
/// use srcpack_core::ManifestCompression;
/// use srcpack_core::ManifestEntry;
///
/// let mut manifest = ArchiveManifest::new();
/// manifest.add_entry(ManifestEntry {
///     name: "a.java".to_string(),
///     size: 10,
///     compressed_size: 8,
///     compression: ManifestCompression::Deflated,
///     is_dir: false,
///     crc32: 0,
/// });
///
/// assert_eq!(manifest.total_entries, 1);
/// assert_eq!(manifest.entry_names().collect::<Vec<_>>(), vec!["a.java"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveManifest {
    /// Entries in stored order.
    pub entries: Vec<ManifestEntry>,

    /// Number of entries.
    pub total_entries: usize,

    /// Sum of uncompressed sizes.
    pub total_size: u64,

    /// Sum of compressed sizes.
    pub total_compressed_size: u64,
}

impl ArchiveManifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and updates the totals.
    pub fn add_entry(&mut self, entry: ManifestEntry) {
        self.total_entries += 1;
        self.total_size = self.total_size.saturating_add(entry.size);
        self.total_compressed_size = self
            .total_compressed_size
            .saturating_add(entry.compressed_size);
        self.entries.push(entry);
    }

    /// Iterates over entry names in stored order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
