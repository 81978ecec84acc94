// Integration tests for the foldertree binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn foldertree() -> Command {
    Command::cargo_bin("foldertree").unwrap()
}

/// Copy the binary into its own directory so the output files land there
fn isolated_binary(dir: &Path) -> PathBuf {
    let bin = dir.join("foldertree");
    fs::copy(assert_cmd::cargo::cargo_bin("foldertree"), &bin).unwrap();

    // A freshly written executable can be briefly busy while another test forks
    for _ in 0..50 {
        match std::process::Command::new(&bin).arg("--version").output() {
            Err(e) if e.raw_os_error() == Some(26) => {
                std::thread::sleep(std::time::Duration::from_millis(20))
            }
            _ => break,
        }
    }
    bin
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn sample_project(dir: &Path) -> PathBuf {
    let target = dir.join("My Project");
    fs::create_dir_all(target.join("src")).unwrap();
    fs::write(target.join("src/main.rs"), "").unwrap();
    fs::write(target.join("Cargo.toml"), "").unwrap();
    target
}

#[test]
fn test_no_arguments_prints_usage() {
    foldertree()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: foldertree"));
}

#[test]
fn test_version_flag_is_case_insensitive() {
    for flag in ["--version", "--VERSION", "--Version"] {
        foldertree()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "foldertree {}",
                env!("CARGO_PKG_VERSION")
            )));
    }
}

#[test]
fn test_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "").unwrap();

    foldertree()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a file, not a folder"));
}

#[test]
fn test_zero_max_depth_is_rejected() {
    let dir = TempDir::new().unwrap();
    foldertree()
        .args(["--max-depth", "0"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_depth must be at least 1"));
}

#[test]
fn test_missing_path_writes_nothing() {
    let bin_dir = TempDir::new().unwrap();
    let bin = isolated_binary(bin_dir.path());
    let scan_dir = TempDir::new().unwrap();

    Command::new(&bin)
        .arg(scan_dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access path"))
        .stdout(predicate::str::contains("Files created").not());

    assert_eq!(dir_entries(bin_dir.path()), vec!["foldertree"]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_root_writes_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = TempDir::new().unwrap();
    let bin = isolated_binary(bin_dir.path());
    let scan_dir = TempDir::new().unwrap();
    let locked = scan_dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let listable = fs::read_dir(&locked).is_ok();
    let output = Command::new(&bin).arg(&locked).output().unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if listable {
        // Privileged users list it like any empty directory
        assert!(output.status.success());
    } else {
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("cannot list directory"));
        assert_eq!(dir_entries(bin_dir.path()), vec!["foldertree"]);
    }
}

#[test]
fn test_writes_files_next_to_executable() {
    let bin_dir = TempDir::new().unwrap();
    let bin = isolated_binary(bin_dir.path());
    let scan_dir = TempDir::new().unwrap();
    let target = sample_project(scan_dir.path());

    // Split the path on its space the way a shell would
    let target_str = target.to_str().unwrap();
    let (head, tail) = target_str.rsplit_once(' ').unwrap();

    Command::new(&bin)
        .args([head, tail])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Files created in \"{}\":",
            bin_dir.path().canonicalize().unwrap().display()
        )))
        .stdout(predicate::str::contains(" - Folder tree.txt"))
        .stdout(predicate::str::contains(" - Folder tree (Markdown).md"))
        .stdout(predicate::str::contains(" - Folder tree (WEB).html"));

    let text = fs::read_to_string(bin_dir.path().join("Folder tree.txt")).unwrap();
    assert_eq!(text, "My Project\n├── Cargo.toml\n└── src/\n    └── main.rs\n");
    let markdown = fs::read_to_string(bin_dir.path().join("Folder tree (Markdown).md")).unwrap();
    assert!(markdown.starts_with("📁 **My Project**\n"));
    assert!(bin_dir.path().join("Folder tree (WEB).html").is_file());
}

#[test]
fn test_failed_write_still_succeeds() {
    let bin_dir = TempDir::new().unwrap();
    let bin = isolated_binary(bin_dir.path());
    // A directory in place of the Markdown file makes that write fail
    fs::create_dir(bin_dir.path().join("Folder tree (Markdown).md")).unwrap();
    let scan_dir = TempDir::new().unwrap();
    let target = sample_project(scan_dir.path());

    Command::new(&bin)
        .arg(&target)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error writing 'Folder tree (Markdown).md'"))
        .stderr(predicate::str::contains("Error writing 'Folder tree.txt'").not())
        .stdout(predicate::str::contains("Files created in"))
        .stdout(predicate::str::contains(" - Folder tree (Markdown).md"));

    assert!(bin_dir.path().join("Folder tree.txt").is_file());
    assert!(bin_dir.path().join("Folder tree (WEB).html").is_file());
    assert!(bin_dir.path().join("Folder tree (Markdown).md").is_dir());
}

#[cfg(unix)]
#[test]
fn test_leading_hyphen_path_is_scanned() {
    let bin_dir = TempDir::new().unwrap();
    let bin = isolated_binary(bin_dir.path());
    let scan_dir = TempDir::new().unwrap();
    fs::create_dir(scan_dir.path().join("-old notes")).unwrap();
    fs::write(scan_dir.path().join("-old notes/todo.md"), "").unwrap();

    Command::new(&bin)
        .current_dir(scan_dir.path())
        .args(["-old", "notes"])
        .assert()
        .success();

    let text = fs::read_to_string(bin_dir.path().join("Folder tree.txt")).unwrap();
    assert_eq!(text, "-old notes\n└── todo.md\n");
}
