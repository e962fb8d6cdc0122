// e2e/file_api.rs — CLI integration tests
//
// Runs the `gbalz` binary as a black box with std::process::Command and checks
// the files it writes, its exit codes, and its stderr at different verbosity
// levels.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use gbalz77::compress_to_vec;
use gbalz77::emit::c_source;
use tempfile::TempDir;

/// Locate the `gbalz` binary produced by Cargo.
fn gbalz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gbalz"))
}

fn tile_bytes(seed: u8) -> Vec<u8> {
    (0..1024u32).map(|i| ((i / 4) % 9) as u8 ^ seed).collect()
}

// ── 1. Default output: .c + .h next to the input ─────────────────────────────

#[test]
fn test_cli_writes_c_and_h() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Sprite1.bin");
    fs::write(&input, tile_bytes(0)).unwrap();

    let status = Command::new(gbalz_bin()).arg(&input).status().unwrap();
    assert!(status.success());

    let stream = compress_to_vec(&tile_bytes(0)).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("Sprite1.c")).unwrap(),
        c_source("Sprite1", &stream)
    );
    let header = fs::read_to_string(dir.path().join("Sprite1.h")).unwrap();
    assert!(header.contains("#define Sprite1Len 1024"));
}

// ── 2. Raw output into a destination directory ───────────────────────────────

#[test]
fn test_cli_raw_into_destination() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("build");
    fs::create_dir(&out).unwrap();
    let input = dir.path().join("map.bin");
    fs::write(&input, tile_bytes(3)).unwrap();

    let status = Command::new(gbalz_bin())
        .args(["-F", "raw", "-o"])
        .arg(&out)
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read(out.join("map.lz77")).unwrap(),
        compress_to_vec(&tile_bytes(3)).unwrap()
    );
}

// ── 3. Recursive directory input ─────────────────────────────────────────────

#[test]
fn test_cli_recursive_directory() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("assets");
    fs::create_dir_all(assets.join("bg")).unwrap();
    fs::write(assets.join("a.bin"), tile_bytes(1)).unwrap();
    fs::write(assets.join("bg/b.bin"), tile_bytes(2)).unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    let status = Command::new(gbalz_bin())
        .args(["-r", "-F", "raw", "-T", "2", "-o"])
        .arg(&out)
        .arg(&assets)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(out.join("a.lz77").exists());
    assert!(out.join("b.lz77").exists());
}

#[test]
fn test_cli_directory_without_recursive_fails() {
    let dir = TempDir::new().unwrap();
    let status = Command::new(gbalz_bin()).arg(dir.path()).status().unwrap();
    assert_eq!(status.code(), Some(1));
}

// ── 4. Exit codes ────────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_input_exit_code() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.bin");
    fs::write(&good, tile_bytes(0)).unwrap();

    let output = Command::new(gbalz_bin())
        .args(["-F", "raw"])
        .arg(dir.path().join("missing.bin"))
        .arg(&good)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    // The good file is still compressed.
    assert!(dir.path().join("good.lz77").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.bin"), "stderr: {stderr}");
}

#[test]
fn test_cli_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("x.bin");
    fs::write(&input, tile_bytes(0)).unwrap();
    fs::write(dir.path().join("x.lz77"), b"old").unwrap();

    let status = Command::new(gbalz_bin())
        .args(["-F", "raw"])
        .arg(&input)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
    assert_eq!(fs::read(dir.path().join("x.lz77")).unwrap(), b"old");

    let status = Command::new(gbalz_bin())
        .args(["-f", "-F", "raw"])
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());
    assert_ne!(fs::read(dir.path().join("x.lz77")).unwrap(), b"old");
}

#[test]
fn test_cli_same_stem_collision() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::create_dir_all(dir.path().join("a")).unwrap();
    fs::create_dir_all(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("a/x.bin"), tile_bytes(1)).unwrap();
    fs::write(dir.path().join("b/x.bin"), tile_bytes(2)).unwrap();

    let output = Command::new(gbalz_bin())
        .args(["-f", "-T", "2", "-o"])
        .arg(&out)
        .arg(dir.path().join("a/x.bin"))
        .arg(dir.path().join("b/x.bin"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.join("x.c").exists());
    assert!(!out.join("x.h").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("would also be written"), "stderr: {stderr}");
}

#[test]
fn test_cli_bad_destination() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("x.bin");
    fs::write(&input, b"abc").unwrap();
    let status = Command::new(gbalz_bin())
        .arg("-o")
        .arg(dir.path().join("no-such-dir"))
        .arg(&input)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_cli_no_arguments_is_usage_error() {
    let output = Command::new(gbalz_bin()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── 5. --version / --help ────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let output = Command::new(gbalz_bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help() {
    let output = Command::new(gbalz_bin()).arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--format"));
}

// ── 6. Verbosity ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_quiet_is_silent() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("q.bin");
    fs::write(&input, tile_bytes(0)).unwrap();
    let output = Command::new(gbalz_bin())
        .args(["-q", "-q", "-F", "raw"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_default_reports_sizes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("r.bin");
    fs::write(&input, tile_bytes(0)).unwrap();
    let output = Command::new(gbalz_bin())
        .args(["-F", "raw"])
        .arg(&input)
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1024"), "stderr: {stderr}");
    assert!(!stderr.contains("wrote"), "level 2 must not list outputs");
}

#[test]
fn test_cli_verbose_lists_outputs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("v.bin");
    fs::write(&input, tile_bytes(0)).unwrap();
    let output = Command::new(gbalz_bin())
        .args(["-v", "-F", "raw"])
        .arg(&input)
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wrote"), "stderr: {stderr}");
    assert!(stderr.contains("v.lz77"));
}
