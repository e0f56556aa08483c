//! ZIP archive building.
//!
//! Collects the qualifying files first and only then creates the output, so
//! a missing or unreadable source tree never leaves an archive behind.

use crate::ArchiveConfig;
use crate::ArchiveError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::creation::report::BuildReport;
use crate::creation::walker::SourceFile;
use crate::creation::walker::collect_sources;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Copy buffer size used for every file.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Builds a deflate-compressed ZIP archive from a source directory.
///
/// Every file under `source_dir` whose name ends with one of
/// `config.extensions` is stored under its path relative to `source_dir`.
/// An existing file at `output` is overwritten.
///
/// # Examples
///
/// ```no_run
/// use srcpack_core::ArchiveConfig;
/// use srcpack_core::build_archive;
///
/// let config = ArchiveConfig::default();
/// let report = build_archive("CCRM_Project", "CCRM_Java_Source_Files.zip", &config)?;
/// println!("Added {} files", report.files_added);
/// # Ok::<(), srcpack_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The source directory does not exist or is not a directory
/// - The output file cannot be created
/// - A source file cannot be read (unless `skip_unreadable` is set)
pub fn build_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output: Q,
    config: &ArchiveConfig,
) -> Result<BuildReport> {
    build_archive_with_progress(source_dir, output, config, &mut NoopProgress)
}

/// Builds a ZIP archive with progress reporting.
///
/// The `progress` callback receives `on_entry_start` and
/// `on_entry_complete` around every file, `on_bytes_written` for each chunk
/// copied (up to 64 KB), and `on_complete` once the archive is finished.
///
/// # Errors
///
/// Same as [`build_archive`].
pub fn build_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output: Q,
    config: &ArchiveConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BuildReport> {
    let source_dir = source_dir.as_ref();
    let output = output.as_ref();
    let start = Instant::now();

    config.validate()?;

    let sources = collect_sources(source_dir, config)?;
    let mut report = BuildReport::new();
    for message in sources.skipped {
        report.files_skipped += 1;
        report.add_warning(format!("Skipped unreadable path: {message}"));
    }

    let mut files = sources.files;
    exclude_output(&mut files, output);

    let file = File::create(output).map_err(|e| {
        ArchiveError::Io(io::Error::new(
            e.kind(),
            format!("cannot create {}: {e}", output.display()),
        ))
    })?;
    write_zip(file, &files, config, &mut report, progress)?;

    report.bytes_compressed = fs::metadata(output)
        .map_err(|e| {
            ArchiveError::Io(io::Error::new(
                e.kind(),
                format!("cannot stat {}: {e}", output.display()),
            ))
        })?
        .len();
    report.duration = start.elapsed();

    progress.on_complete();

    Ok(report)
}

/// Writes `files` into a new ZIP on `writer` and finishes the archive.
fn write_zip<W: Write + Seek>(
    writer: W,
    files: &[SourceFile],
    config: &ArchiveConfig,
    report: &mut BuildReport,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = file_options(config);
    let total = files.len();

    // Reusable buffer for file copying
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for (idx, file) in files.iter().enumerate() {
        progress.on_entry_start(&file.archive_path, total, idx + 1);

        let mut source = match File::open(&file.path) {
            Ok(source) => source,
            Err(e) if config.skip_unreadable => {
                report.files_skipped += 1;
                report.add_warning(format!(
                    "Skipped unreadable file: {} ({e})",
                    file.path.display()
                ));
                progress.on_entry_complete(&file.archive_path);
                continue;
            }
            Err(e) => {
                return Err(ArchiveError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot open {}: {e}", file.path.display()),
                )));
            }
        };

        let entry_options = entry_options(options, &source, file, config)?;
        zip.start_file(file.archive_name.as_str(), entry_options)
            .map_err(|e| ArchiveError::from_zip(e, "failed to start file in ZIP"))?;

        let bytes_written =
            copy_entry(&mut source, &mut zip, &mut buffer, progress).map_err(|e| {
                ArchiveError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot archive {}: {e}", file.path.display()),
                ))
            })?;

        report.files_added += 1;
        report.bytes_written += bytes_written;

        progress.on_entry_complete(&file.archive_path);
    }

    // Writes the central directory
    zip.finish()
        .map_err(|e| ArchiveError::from_zip(e, "failed to finish ZIP archive"))?;

    Ok(())
}

/// Streams `source` into `sink` through `buffer`, reporting each chunk.
///
/// Reads interrupted by a signal are retried. Returns the number of bytes
/// copied.
fn copy_entry<R: Read, W: Write>(
    source: &mut R,
    sink: &mut W,
    buffer: &mut [u8],
    progress: &mut dyn ProgressCallback,
) -> io::Result<u64> {
    let mut copied = 0u64;
    loop {
        let bytes_read = match source.read(buffer) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink.write_all(&buffer[..bytes_read])?;
        copied += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }
}

/// Base options shared by every entry.
fn file_options(config: &ArchiveConfig) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(config.compression_level.map(i64::from))
}

/// Per-entry options: ZIP64 for large files and optional permission bits.
fn entry_options(
    options: SimpleFileOptions,
    source: &File,
    file: &SourceFile,
    config: &ArchiveConfig,
) -> Result<SimpleFileOptions> {
    let metadata = source.metadata()?;
    let size = metadata.len().max(file.size);
    let options = options.large_file(size >= u64::from(u32::MAX));

    if !config.preserve_permissions {
        return Ok(options);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Ok(options.unix_permissions(metadata.permissions().mode()))
    }
    #[cfg(not(unix))]
    {
        Ok(options)
    }
}

/// Drops the output archive from the file list when it sits inside the
/// source tree.
fn exclude_output(files: &mut Vec<SourceFile>, output: &Path) {
    let Ok(output) = fs::canonicalize(output) else {
        return;
    };

    files.retain(|file| {
        file.path.file_name() != output.file_name()
            || fs::canonicalize(&file.path).map_or(true, |path| path != output)
    });
}
