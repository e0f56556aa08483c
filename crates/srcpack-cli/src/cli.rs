//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use srcpack_core::DEFAULT_ARCHIVE_NAME;
use srcpack_core::DEFAULT_SOURCE_DIR;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srcpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (default: pack with default settings)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack source files into a ZIP archive and list its contents
    Pack(PackArgs),
    /// List the contents of an existing ZIP archive
    List(ListArgs),
    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Directory to scan for source files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Archive file to create or overwrite
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_ARCHIVE_NAME)]
    pub output: PathBuf,

    /// File name suffix to include, e.g. ".java" (can be repeated;
    /// default: .java, .md, .csv)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Skip unreadable files and directories instead of failing
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Do not store Unix permission bits
    #[arg(long)]
    pub no_preserve_permissions: bool,
}

impl Default for PackArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            output: PathBuf::from(DEFAULT_ARCHIVE_NAME),
            extensions: Vec::new(),
            compression_level: None,
            follow_symlinks: false,
            skip_unreadable: false,
            no_preserve_permissions: false,
        }
    }
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}
