//! Example: Packing a small project with srcpack-core
//!
//! Run with: `cargo run --example create_archive`

use srcpack_core::ArchiveConfig;
use srcpack_core::build_archive;
use srcpack_core::list_archive;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let project = std::env::temp_dir().join("srcpack_example_project");
    fs::create_dir_all(project.join("src"))?;
    fs::write(project.join("README.md"), "# Example\n")?;
    fs::write(project.join("src/Main.java"), "class Main {}\n")?;
    fs::write(project.join("build.log"), "ignored\n")?;

    // Example 1: default extensions (.java, .md, .csv)
    println!("Example 1: Default settings");
    let archive = std::env::temp_dir().join("srcpack_example.zip");
    let report = build_archive(&project, &archive, &ArchiveConfig::default())?;
    println!("  Added {} files", report.files_added);
    println!(
        "  Compression ratio: {:.1}%",
        report.compression_percentage()
    );

    for name in list_archive(&archive)?.entry_names() {
        println!("  {name}");
    }

    // Example 2: custom extensions and maximum compression
    println!("\nExample 2: Custom extensions");
    let config = ArchiveConfig::default()
        .with_extensions(vec![".log".to_string()])
        .with_compression_level(9);
    let report = build_archive(&project, &archive, &config)?;
    println!("  Added {} files", report.files_added);

    fs::remove_file(&archive)?;
    fs::remove_dir_all(&project)?;

    println!("\nExamples completed successfully!");
    Ok(())
}
