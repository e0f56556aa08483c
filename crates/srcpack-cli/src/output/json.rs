//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use srcpack_core::ArchiveManifest;
use srcpack_core::BuildReport;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct EntryOutput {
    name: String,
    size: u64,
    compressed_size: u64,
    compression: String,
}

#[derive(Debug, Serialize)]
struct PackOutput {
    output_path: String,
    files_added: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    compression_percentage: f64,
    files_skipped: usize,
    duration_ms: u128,
    warnings: Vec<String>,
    entries: Vec<EntryOutput>,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    total_entries: usize,
    total_size: u64,
    total_compressed_size: u64,
    entries: Vec<EntryOutput>,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn entries(manifest: &ArchiveManifest) -> Vec<EntryOutput> {
        manifest
            .entries
            .iter()
            .map(|e| EntryOutput {
                name: e.name.clone(),
                size: e.size,
                compressed_size: e.compressed_size,
                compression: e.compression.to_string(),
            })
            .collect()
    }

    fn pack_output(
        output_path: &Path,
        report: &BuildReport,
        manifest: &ArchiveManifest,
    ) -> JsonOutput<PackOutput> {
        JsonOutput::success(
            "pack",
            PackOutput {
                output_path: output_path.display().to_string(),
                files_added: report.files_added,
                bytes_written: report.bytes_written,
                bytes_compressed: report.bytes_compressed,
                compression_ratio: report.compression_ratio(),
                compression_percentage: report.compression_percentage(),
                files_skipped: report.files_skipped,
                duration_ms: report.duration.as_millis(),
                warnings: report.warnings.clone(),
                entries: Self::entries(manifest),
            },
        )
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(
        &self,
        output_path: &Path,
        report: &BuildReport,
        manifest: &ArchiveManifest,
    ) -> Result<()> {
        Self::output(&Self::pack_output(output_path, report, manifest))
    }

    fn format_manifest(&self, manifest: &ArchiveManifest) -> Result<()> {
        let data = ListOutput {
            total_entries: manifest.total_entries,
            total_size: manifest.total_size,
            total_compressed_size: manifest.total_compressed_size,
            entries: Self::entries(manifest),
        };

        Self::output(&JsonOutput::success("list", data))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    // Warnings are carried in the pack document; stdout stays one document.
    fn format_warning(&self, message: &str) {
        let _ = writeln!(io::stderr(), "WARNING: {message}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use srcpack_core::ManifestCompression;
    use srcpack_core::ManifestEntry;

    #[test]
    fn test_pack_output_structure() {
        let mut manifest = ArchiveManifest::new();
        manifest.add_entry(ManifestEntry {
            name: "a.java".to_string(),
            size: 10,
            compressed_size: 8,
            compression: ManifestCompression::Deflated,
            is_dir: false,
            crc32: 0,
        });
        let mut report = BuildReport::new();
        report.files_added = 1;
        report.bytes_written = 10;

        let output = JsonFormatter::pack_output(Path::new("out.zip"), &report, &manifest);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["operation"], "pack");
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["output_path"], "out.zip");
        assert_eq!(value["data"]["files_added"], 1);
        assert_eq!(value["data"]["entries"][0]["name"], "a.java");
        assert_eq!(value["data"]["entries"][0]["compression"], "deflated");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_output_structure() {
        let output = JsonOutput::<()>::error("list", "boom");
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "boom");
        assert!(value.get("data").is_none());
    }
}
