//! Pack command implementation.

use crate::cli::PackArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use srcpack_core::ArchiveConfig;
use srcpack_core::NoopProgress;
use srcpack_core::ProgressCallback;
use srcpack_core::build_archive_with_progress;
use srcpack_core::list_archive;

/// Builds the archive, then reopens it and prints its contents.
pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter, silent: bool) -> Result<()> {
    let config = build_config(args);

    // Progress bar only for interactive, non-JSON, non-quiet runs
    let mut progress: Box<dyn ProgressCallback> = if !silent && CliProgress::should_show() {
        Box::new(CliProgress::new("Packing"))
    } else {
        Box::new(NoopProgress)
    };

    let report = add_archive_context(
        build_archive_with_progress(&args.source, &args.output, &config, progress.as_mut()),
        &args.output,
    )?;
    drop(progress);

    let manifest = add_archive_context(list_archive(&args.output), &args.output)?;

    formatter.format_pack_result(&args.output, &report, &manifest)?;

    for warning in &report.warnings {
        formatter.format_warning(warning);
    }

    Ok(())
}

fn build_config(args: &PackArgs) -> ArchiveConfig {
    let mut config = ArchiveConfig::default()
        .with_follow_symlinks(args.follow_symlinks)
        .with_skip_unreadable(args.skip_unreadable)
        .with_preserve_permissions(!args.no_preserve_permissions);

    if !args.extensions.is_empty() {
        config = config.with_extensions(args.extensions.clone());
    }

    if let Some(level) = args.compression_level {
        config.compression_level = Some(level);
    }

    config
}
