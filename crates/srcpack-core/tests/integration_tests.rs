//! Integration tests for srcpack-core.
//!
//! These tests build real archives from temporary source trees and read
//! them back.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use srcpack_core::ArchiveConfig;
use srcpack_core::ArchiveError;
use srcpack_core::build_archive;
use srcpack_core::list_archive;
use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

/// Lays out a small Java project with documentation and data files.
fn create_project(root: &Path) {
    let files: &[(&str, &str)] = &[
        ("README.md", "# CCRM\n"),
        ("USAGE.md", "Run the app.\n"),
        ("build.sh", "javac -d out src/**/*.java\n"),
        ("src/edu/ccrm/cli/CCRMApplication.java", "class CCRMApplication {}\n"),
        ("src/edu/ccrm/domain/Student.java", "class Student {}\n"),
        ("src/edu/ccrm/domain/Course.java", "class Course {}\n"),
        ("src/edu/ccrm/domain/Grade.java", "enum Grade { S, A, B }\n"),
        ("src/edu/ccrm/domain/Student.class", "\u{ca}\u{fe}"),
        ("test-data/students.csv", "id,name\n1,Ada\n"),
        ("test-data/courses.csv", "code,title\nCS101,Intro\n"),
        ("test-data/notes.txt", "not archived\n"),
        ("docs/diagram.png", "binary"),
    ];

    for (path, content) in files {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
}

fn qualifying_files(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let name = path.file_name().unwrap().to_str().unwrap();
                if [".java", ".md", ".csv"].iter().any(|e| name.ends_with(e)) {
                    let rel = path.strip_prefix(root).unwrap();
                    found.insert(rel.to_str().unwrap().replace('\\', "/"));
                }
            }
        }
    }
    found
}

#[test]
fn test_every_qualifying_file_has_exactly_one_entry() {
    let source = TempDir::new().unwrap();
    create_project(source.path());
    let out = TempDir::new().unwrap();
    let archive = out.path().join("project.zip");

    build_archive(source.path(), &archive, &ArchiveConfig::default()).unwrap();
    let manifest = list_archive(&archive).unwrap();

    let names: Vec<_> = manifest.entry_names().map(str::to_string).collect();
    let unique: BTreeSet<_> = names.iter().cloned().collect();
    assert_eq!(names.len(), unique.len(), "duplicate entries: {names:?}");
    assert_eq!(unique, qualifying_files(source.path()));
}

#[test]
fn test_non_qualifying_files_are_absent() {
    let source = TempDir::new().unwrap();
    create_project(source.path());
    let out = TempDir::new().unwrap();
    let archive = out.path().join("project.zip");

    build_archive(source.path(), &archive, &ArchiveConfig::default()).unwrap();
    let manifest = list_archive(&archive).unwrap();

    for name in manifest.entry_names() {
        assert!(!name.ends_with(".txt"), "unexpected entry {name}");
        assert!(!name.ends_with(".class"), "unexpected entry {name}");
        assert!(!name.ends_with(".png"), "unexpected entry {name}");
        assert!(!name.ends_with(".sh"), "unexpected entry {name}");
    }
}

#[test]
fn test_entry_paths_are_relative_to_source() {
    let parent = TempDir::new().unwrap();
    let source = parent.path().join("CCRM_Project");
    create_project(&source);
    let archive = parent.path().join("project.zip");

    build_archive(&source, &archive, &ArchiveConfig::default()).unwrap();
    let manifest = list_archive(&archive).unwrap();

    for name in manifest.entry_names() {
        assert!(!name.starts_with('/'), "absolute entry {name}");
        assert!(!name.starts_with("CCRM_Project"), "leaked root in {name}");
        assert!(!name.split('/').any(|c| c == ".."), "parent ref in {name}");
    }
}

#[test]
fn test_roundtrip_extracted_bytes_match_sources() {
    let source = TempDir::new().unwrap();
    create_project(source.path());
    let out = TempDir::new().unwrap();
    let archive_path = out.path().join("project.zip");

    build_archive(source.path(), &archive_path, &ArchiveConfig::default()).unwrap();

    let mut archive = zip::ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
    assert!(archive.len() > 0);
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut extracted = Vec::new();
        entry.read_to_end(&mut extracted).unwrap();

        let original = fs::read(source.path().join(entry.name())).unwrap();
        assert_eq!(extracted, original, "mismatch for {}", entry.name());
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let source = TempDir::new().unwrap();
    create_project(source.path());
    let out = TempDir::new().unwrap();
    let first = out.path().join("first.zip");
    let second = out.path().join("second.zip");

    build_archive(source.path(), &first, &ArchiveConfig::default()).unwrap();
    build_archive(source.path(), &second, &ArchiveConfig::default()).unwrap();

    let first: Vec<_> = list_archive(&first)
        .unwrap()
        .entries
        .into_iter()
        .map(|e| (e.name, e.size, e.crc32))
        .collect();
    let second: Vec<_> = list_archive(&second)
        .unwrap()
        .entries
        .into_iter()
        .map(|e| (e.name, e.size, e.crc32))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_small_tree_contains_exactly_expected_entries() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("a.java"), "class A {}").unwrap();
    fs::write(source.path().join("b.txt"), "b").unwrap();
    fs::create_dir(source.path().join("sub")).unwrap();
    fs::write(source.path().join("sub/c.md"), "# c").unwrap();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("small.zip");

    let report = build_archive(source.path(), &archive, &ArchiveConfig::default()).unwrap();
    let manifest = list_archive(&archive).unwrap();

    assert_eq!(report.files_added, 2);
    assert_eq!(
        manifest.entry_names().collect::<Vec<_>>(),
        vec!["a.java", "sub/c.md"]
    );
}

#[test]
fn test_missing_source_fails_without_creating_archive() {
    let out = TempDir::new().unwrap();
    let archive = out.path().join("never.zip");

    let err = build_archive(
        out.path().join("CCRM_Project"),
        &archive,
        &ArchiveConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_io_error());
    assert!(matches!(err, ArchiveError::SourceNotFound { .. }));
    assert!(!archive.exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("a.java"), "class A {}").unwrap();

    let err = build_archive(
        source.path(),
        source.path().join("no/such/dir/out.zip"),
        &ArchiveConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ArchiveError::Io(_)));
}

#[test]
fn test_listing_garbage_is_format_error() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.zip");
    fs::write(&bogus, "PK but not really an archive at all, just text").unwrap();

    let err = list_archive(&bogus).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_manifest_reports_deflate_and_sizes() {
    let source = TempDir::new().unwrap();
    create_project(source.path());
    let out = TempDir::new().unwrap();
    let archive = out.path().join("project.zip");

    let report = build_archive(source.path(), &archive, &ArchiveConfig::default()).unwrap();
    let manifest = list_archive(&archive).unwrap();

    assert_eq!(manifest.total_entries, report.files_added);
    assert_eq!(manifest.total_size, report.bytes_written);
    assert_eq!(report.bytes_compressed, fs::metadata(&archive).unwrap().len());
    assert!(
        manifest
            .entries
            .iter()
            .all(|e| e.compression == srcpack_core::ManifestCompression::Deflated)
    );
}
