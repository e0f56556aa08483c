//! Archive listing implementation.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use zip::CompressionMethod;

use crate::ArchiveError;
use crate::Result;
use crate::inspection::manifest::ArchiveManifest;
use crate::inspection::manifest::ManifestCompression;
use crate::inspection::manifest::ManifestEntry;

/// Lists archive entries in the order they are stored.
///
/// Only the central directory is read; entry data is not decompressed.
///
/// # Errors
///
/// Returns error if:
/// - Archive file cannot be opened (`Io`)
/// - The file is not a valid ZIP archive or an entry record cannot be read
///   (`InvalidArchive`)
///
/// # Examples
///
/// ```no_run
/// use srcpack_core::list_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let manifest = list_archive("CCRM_Java_Source_Files.zip")?;
/// for name in manifest.entry_names() {
///     println!("  {name}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_archive<P: AsRef<Path>>(archive_path: P) -> Result<ArchiveManifest> {
    let archive_path = archive_path.as_ref();
    let file = File::open(archive_path).map_err(|e| {
        ArchiveError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot open {}: {e}", archive_path.display()),
        ))
    })?;
    list_zip_entries(BufReader::new(file))
}

/// Lists entries of a ZIP archive read from any seekable reader.
fn list_zip_entries<R: Read + Seek>(reader: R) -> Result<ArchiveManifest> {
    let mut archive = zip::ZipArchive::new(reader)
        .map_err(|e| ArchiveError::from_zip(e, "failed to open ZIP archive"))?;

    let mut manifest = ArchiveManifest::new();

    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| ArchiveError::from_zip(e, "failed to read ZIP entry"))?;

        manifest.add_entry(ManifestEntry {
            name: entry.name().to_string(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            compression: convert_compression(entry.compression()),
            is_dir: entry.is_dir(),
            crc32: entry.crc32(),
        });
    }

    Ok(manifest)
}

fn convert_compression(method: CompressionMethod) -> ManifestCompression {
    match method {
        CompressionMethod::Stored => ManifestCompression::Stored,
        CompressionMethod::Deflated => ManifestCompression::Deflated,
        other => ManifestCompression::Other(format!("{other:?}")),
    }
}
