//! Progress bar implementation for the pack command.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use srcpack_core::ProgressCallback;
use std::path::Path;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Shows the file count and the amount of source data compressed so far.
/// The bar is drawn on stderr and cleared when packing finishes or the
/// wrapper is dropped.
pub struct CliProgress {
    bar: ProgressBar,
    message: String,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a new progress bar with `message` as its label.
    ///
    /// The length is unknown until the first file starts.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(0);

        // Template: "Packing 15.2 MB [████████░░░░] 42/100 files (3s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_message(message.to_string());

        Self {
            bar,
            message: message.to_string(),
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, _current: usize) {
        self.bar.set_length(total as u64);
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_message(format!(
            "{} {}",
            self.message,
            humanize_bytes(self.bytes_written)
        ));
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to human-readable format (KB, MB, GB).
fn humanize_bytes(bytes: u64) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_bytes() {
        assert_eq!(humanize_bytes(0), "0 B");
        assert_eq!(humanize_bytes(1023), "1023 B");
        assert_eq!(humanize_bytes(1536), "1.5 KB");
        assert_eq!(humanize_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(humanize_bytes(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_progress_tracks_files_and_bytes() {
        let mut progress = CliProgress::new("Packing");

        progress.on_entry_start(Path::new("a.java"), 2, 1);
        progress.on_bytes_written(1024);
        progress.on_entry_complete(Path::new("a.java"));
        progress.on_entry_start(Path::new("b.md"), 2, 2);
        progress.on_bytes_written(512);
        progress.on_entry_complete(Path::new("b.md"));

        assert_eq!(progress.bytes_written, 1536);
        assert_eq!(progress.bar.length(), Some(2));
        assert_eq!(progress.bar.position(), 2);
    }
}
