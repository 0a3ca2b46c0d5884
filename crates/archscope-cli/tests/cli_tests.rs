//! Integration tests for archscope-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn archscope_cmd() -> Command {
    cargo_bin_cmd!("archscope")
}

/// Writes a tar archive of `(path, content)` files into `dir`.
fn write_tar(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, *data).unwrap();
    }
    let archive = dir.join(name);
    std::fs::write(&archive, builder.into_inner().unwrap()).unwrap();
    archive
}

/// Writes a zip archive of `(path, content)` files into `dir`. Names ending
/// in `/` become directory records.
fn write_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    use zip::write::SimpleFileOptions;

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (path, data) in files {
        if path.ends_with('/') {
            zip.add_directory(*path, options).unwrap();
        } else {
            zip.start_file(*path, options).unwrap();
            zip.write_all(data).unwrap();
        }
    }
    let archive = dir.join(name);
    std::fs::write(&archive, zip.finish().unwrap().into_inner()).unwrap();
    archive
}

fn release_v1(dir: &Path) -> PathBuf {
    write_tar(
        dir,
        "v1.tar",
        &[
            ("docs/readme.txt", b"read me"),
            ("src/main.rs", b"fn main() {}"),
            ("src/old.rs", b"// legacy"),
        ],
    )
}

fn release_v2(dir: &Path) -> PathBuf {
    write_zip(
        dir,
        "v2.zip",
        &[
            ("docs/", b""),
            ("docs/readme.txt", b"read me"),
            ("docs/notes.txt", b"new notes"),
            ("src/main.rs", b"fn main() { run() }"),
        ],
    )
}

#[test]
fn test_version_flag() {
    archscope_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("archscope"));
}

#[test]
fn test_help_lists_commands() {
    archscope_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("content"))
        .stdout(predicate::str::contains("diff"))
        .stdout(predicate::str::contains("walk"));
}

#[test]
fn test_tree_renders_hierarchy() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v1(temp.path());

    archscope_cmd()
        .arg("tree")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("├── docs/"))
        .stdout(predicate::str::contains("│   └── readme.txt"))
        .stdout(predicate::str::contains("└── src/"))
        .stdout(predicate::str::contains("2 directories, 3 files"));
}

#[test]
fn test_tree_level_and_dirs_only() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v1(temp.path());

    archscope_cmd()
        .args(["tree", "--level", "1", "--dirs-only"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/"))
        .stdout(predicate::str::contains("readme.txt").not())
        .stdout(predicate::str::contains("2 directories, 0 files"));
}

#[test]
fn test_tree_json() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v2(temp.path());

    let output = archscope_cmd()
        .args(["--json", "tree"])
        .arg(&archive)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "tree");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["files"], 3);
    assert_eq!(json["data"]["directories"], 1);
    assert_eq!(json["data"]["synthesized_directories"], 1);
    assert_eq!(json["data"]["root"]["children"][0]["name"], "docs");
}

#[test]
fn test_content_of_subpath() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v2(temp.path());

    archscope_cmd()
        .arg("content")
        .arg(&archive)
        .arg("docs")
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/notes.txt"))
        .stdout(predicate::str::contains("docs/readme.txt"))
        .stdout(predicate::str::contains("src/main.rs").not());
}

#[test]
fn test_content_long_shows_checksum() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_tar(temp.path(), "one.tar", &[("hello.txt", b"hello")]);

    archscope_cmd()
        .args(["content", "--long"])
        .arg(&archive)
        .assert()
        .success()
        // CRC-32 of "hello"
        .stdout(predicate::str::contains("3610a686"))
        .stdout(predicate::str::contains("hello.txt"));
}

#[test]
fn test_content_missing_subpath_reports_prefix() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v2(temp.path());

    archscope_cmd()
        .arg("content")
        .arg(&archive)
        .arg("docs/missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No 'missing.txt' under 'docs'"))
        .stderr(predicate::str::contains("HINT"));
}

#[test]
fn test_diff_lists_changes() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let left = release_v1(temp.path());
    let right = release_v2(temp.path());

    archscope_cmd()
        .arg("diff")
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ docs/notes.txt"))
        .stdout(predicate::str::contains("M src/main.rs"))
        .stdout(predicate::str::contains("- src/old.rs"))
        .stdout(predicate::str::contains("docs/readme.txt").not());
}

#[test]
fn test_diff_all_includes_unchanged() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let left = release_v1(temp.path());
    let right = release_v2(temp.path());

    archscope_cmd()
        .args(["diff", "--all"])
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/readme.txt"));
}

#[test]
fn test_diff_identical_archives() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let left = write_tar(temp.path(), "a.tar", &[("x/y.txt", b"same")]);
    let right = write_zip(temp.path(), "b.zip", &[("x/y.txt", b"same")]);

    archscope_cmd()
        .arg("diff")
        .arg(&left)
        .arg(&right)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archives are identical"));
}

#[test]
fn test_diff_json_summary() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let left = release_v1(temp.path());
    let right = release_v2(temp.path());

    let output = archscope_cmd()
        .args(["diff", "--json"])
        .arg(&left)
        .arg(&right)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let summary = &json["data"]["summary"];
    assert_eq!(summary["identical"], false);
    assert_eq!(summary["added"]["files"], 1);
    assert_eq!(summary["removed"]["files"], 1);
    assert_eq!(summary["modified"]["files"], 1);
    assert_eq!(summary["modified"]["directories"], 2);

    let statuses: Vec<&str> = json["data"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["status"].as_str().unwrap())
        .collect();
    assert!(!statuses.contains(&"unchanged"));
}

#[test]
fn test_diff_missing_right_archive_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let left = release_v1(temp.path());

    archscope_cmd()
        .arg("diff")
        .arg(&left)
        .arg(temp.path().join("absent.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.zip"));
}

#[test]
fn test_tree_of_current_dir_tarball() {
    let temp = TempDir::new().expect("failed to create temp dir");

    // layout written by `tar -C dir -cf x.tar .`
    let mut builder = tar::Builder::new(Vec::new());
    let mut header = tar::Header::new_gnu();
    header.set_size(0);
    header.set_mode(0o755);
    header.set_entry_type(tar::EntryType::Directory);
    header.set_cksum();
    builder
        .append_data(&mut header, "./", std::io::empty())
        .unwrap();
    let mut header = tar::Header::new_gnu();
    header.set_size(5);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, "./a.txt", &b"alpha"[..])
        .unwrap();
    let archive = temp.path().join("dot.tar");
    std::fs::write(&archive, builder.into_inner().unwrap()).unwrap();

    archscope_cmd()
        .arg("tree")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("└── a.txt"))
        .stdout(predicate::str::contains("0 directories, 1 files"));
}

#[test]
fn test_walk_lists_directories() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v1(temp.path());

    archscope_cmd()
        .arg("walk")
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("[dir]  docs"))
        .stdout(predicate::str::contains("src/"))
        .stdout(predicate::str::contains("[file] old.rs"));
}

#[test]
fn test_quiet_suppresses_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v1(temp.path());

    archscope_cmd()
        .args(["--quiet", "tree"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quota_error_has_hint() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = release_v1(temp.path());

    archscope_cmd()
        .args(["tree", "--max-entries", "1"])
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-entries"));
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("data.rar");
    std::fs::write(&archive, b"Rar!").unwrap();

    archscope_cmd()
        .arg("tree")
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Archive format not supported"));
}

#[test]
fn test_conflicting_archive_is_rejected() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = write_zip(
        temp.path(),
        "bad.zip",
        &[("lib", b"file"), ("lib/inner.txt", b"x")],
    );

    archscope_cmd()
        .arg("tree")
        .arg(&archive)
        .assert()
        .failure()
        .stderr(predicate::str::contains("as both a file and a directory"));
}

#[test]
fn test_completion_bash() {
    archscope_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("archscope"));
}
