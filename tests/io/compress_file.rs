// Integration tests for src/io/compress_file.rs — single-file compression.

use std::fs;

use gbalz77::compress_to_vec;
use gbalz77::emit::{c_header, c_source};
use gbalz77::io::compress_file::{compress_filename, output_paths};
use gbalz77::io::prefs::{OutputFormat, Prefs};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn sample() -> Vec<u8> {
    (0..600u32).map(|i| (i % 37) as u8).collect()
}

fn prefs(format: OutputFormat) -> Prefs {
    let mut p = Prefs::new();
    p.set_format(format);
    p
}

// ─────────────────────────────────────────────────────────────────────────────
// output_paths
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn output_paths_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Sprite1.bin");
    let paths = output_paths(&input, &prefs(OutputFormat::Both)).unwrap();
    assert_eq!(paths, vec![dir.path().join("Sprite1.c"), dir.path().join("Sprite1.h")]);
}

#[test]
fn output_paths_in_destination() {
    let dir = tempfile::tempdir().unwrap();
    let mut p = prefs(OutputFormat::Raw);
    p.set_destination(Some(dir.path().join("build")));
    let paths = output_paths(std::path::Path::new("assets/Map.bin"), &p).unwrap();
    assert_eq!(paths, vec![dir.path().join("build").join("Map.lz77")]);
}

#[test]
fn output_paths_single_kind() {
    let input = std::path::Path::new("a/b.dat");
    assert_eq!(output_paths(input, &prefs(OutputFormat::C)).unwrap().len(), 1);
    assert_eq!(output_paths(input, &prefs(OutputFormat::H)).unwrap().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// compress_filename
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn raw_output_is_the_stream() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tiles.bin");
    fs::write(&input, sample()).unwrap();

    let report = compress_filename(&input, &prefs(OutputFormat::Raw)).unwrap();
    let written = fs::read(dir.path().join("tiles.lz77")).unwrap();
    assert_eq!(written, compress_to_vec(&sample()).unwrap());
    assert_eq!(report.input_len, 600);
    assert_eq!(report.compressed_len, written.len());
    assert_eq!(report.outputs, vec![dir.path().join("tiles.lz77")]);
}

#[test]
fn c_and_h_outputs_match_emitters() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Hero.bin");
    fs::write(&input, sample()).unwrap();

    compress_filename(&input, &prefs(OutputFormat::Both)).unwrap();
    let stream = compress_to_vec(&sample()).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("Hero.c")).unwrap(),
        c_source("Hero", &stream)
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Hero.h")).unwrap(),
        c_header("Hero", 600, stream.len())
    );
}

#[test]
fn symbol_override_is_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("x.bin");
    fs::write(&input, b"abc").unwrap();
    let mut p = prefs(OutputFormat::H);
    p.set_symbol(Some("boss-1".into()));

    compress_filename(&input, &p).unwrap();
    let header = fs::read_to_string(dir.path().join("x.h")).unwrap();
    assert!(header.contains("#define boss_1Len 3"));
}

#[test]
fn existing_output_is_kept_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.bin");
    fs::write(&input, sample()).unwrap();
    fs::write(dir.path().join("a.h"), b"keep me").unwrap();

    let err = compress_filename(&input, &prefs(OutputFormat::Both)).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read(dir.path().join("a.h")).unwrap(), b"keep me");
    // Nothing was written before the check failed.
    assert!(!dir.path().join("a.c").exists());
}

#[test]
fn existing_output_is_replaced_with_force() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.bin");
    fs::write(&input, sample()).unwrap();
    fs::write(dir.path().join("a.lz77"), b"stale").unwrap();
    let mut p = prefs(OutputFormat::Raw);
    p.set_overwrite(true);

    compress_filename(&input, &p).unwrap();
    assert_eq!(
        fs::read(dir.path().join("a.lz77")).unwrap(),
        compress_to_vec(&sample()).unwrap()
    );
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = compress_filename(&dir.path().join("nope.bin"), &prefs(OutputFormat::Raw))
        .unwrap_err();
    assert!(format!("{err:#}").contains("cannot read"));
}

#[test]
fn empty_input_ratio_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.bin");
    fs::write(&input, b"").unwrap();
    let report = compress_filename(&input, &prefs(OutputFormat::Raw)).unwrap();
    assert_eq!(report.compressed_len, 4);
    assert_eq!(report.ratio_percent(), 0.0);
}
