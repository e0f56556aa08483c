//! Human-readable output formatter.
//!
//! The pack and list listings are plain text so they can be diffed and
//! piped; styling is limited to the verbose statistics and to diagnostics.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use srcpack_core::ArchiveManifest;
use srcpack_core::BuildReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled_stderr(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    /// Lines printed after a successful pack.
    fn pack_lines(output_path: &Path, manifest: &ArchiveManifest) -> Vec<String> {
        let mut lines = vec![
            format!("Created {} with all Java source files", output_path.display()),
            String::new(),
        ];
        lines.extend(Self::manifest_lines(manifest));
        lines
    }

    /// Header followed by one indented line per entry.
    fn manifest_lines(manifest: &ArchiveManifest) -> Vec<String> {
        std::iter::once("Contents of the ZIP file:".to_string())
            .chain(manifest.entry_names().map(|name| format!("  {name}")))
            .collect()
    }

    fn stats_lines(report: &BuildReport) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            format!("  Files added:      {}", report.files_added),
            format!("  Total size:       {}", Self::format_size(report.bytes_written)),
            format!(
                "  Archive size:     {}",
                Self::format_size(report.bytes_compressed)
            ),
            format!("  Compression:      {:.1}%", report.compression_percentage()),
        ];
        if report.files_skipped > 0 {
            lines.push(format!("  Files skipped:    {}", report.files_skipped));
        }
        lines.push(format!("  Duration:         {:?}", report.duration));
        lines
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.term.write_line(line)?;
        }
        Ok(())
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(
        &self,
        output_path: &Path,
        report: &BuildReport,
        manifest: &ArchiveManifest,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_lines(&Self::pack_lines(output_path, manifest))?;

        if self.verbose {
            self.write_lines(&Self::stats_lines(report))?;
        }

        Ok(())
    }

    fn format_manifest(&self, manifest: &ArchiveManifest) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_lines(&Self::manifest_lines(manifest))?;

        if self.verbose {
            self.term.write_line("")?;
            self.term.write_line(&format!(
                "Total: {} entries, {} ({} compressed)",
                manifest.total_entries,
                Self::format_size(manifest.total_size),
                Self::format_size(manifest.total_compressed_size)
            ))?;
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("Error:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("Error: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .err_term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("WARNING: {message}"));
        }
    }
}
