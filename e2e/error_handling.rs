//! E2E Test Suite 03: Error Handling
//!
//! Every failure path of the library, the C entry points and the file layer
//! must come back as an error value. None of them may panic, write past the
//! destination, or leave a half-written stream behind that claims success.

use std::fs;

use gbalz77::abi::{GBA_LZ77Compress, GBA_LZ77CompressBound};
use gbalz77::block::compress::{LZ77_E_BADARGS, LZ77_E_DSTFULL};
use gbalz77::io::{compress_filename, compress_multiple_filenames, OutputFormat, Prefs};
use gbalz77::{compress, compress_bound, compress_to_vec, Lz77Error, LZ77_MAX_INPUT_SIZE};
use tempfile::TempDir;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 / 5) as u8).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Library API
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn undersized_destination_never_writes_past_its_end() {
    let src = sample(300);
    let needed = compress_to_vec(&src).unwrap().len();
    for cap in [0, 1, 3, 4, 5, needed / 2, needed - 1] {
        // Guard bytes after the slice must survive.
        let mut buf = vec![0xEEu8; cap + 16];
        let res = compress(&src, &mut buf[..cap]);
        assert_eq!(res, Err(Lz77Error::OutputExhausted), "cap {cap}");
        assert!(buf[cap..].iter().all(|&b| b == 0xEE), "cap {cap}");
    }
}

#[test]
fn exact_capacity_succeeds() {
    let src = sample(300);
    let expected = compress_to_vec(&src).unwrap();
    let mut dst = vec![0u8; expected.len()];
    assert_eq!(compress(&src, &mut dst), Ok(expected.len()));
    assert_eq!(dst, expected);
}

#[test]
fn oversize_input_is_invalid_argument() {
    let src = vec![0u8; LZ77_MAX_INPUT_SIZE + 1];
    let mut dst = [0xEEu8; 8];
    assert_eq!(compress(&src, &mut dst), Err(Lz77Error::InvalidArgument));
    assert_eq!(dst, [0xEE; 8], "nothing is written for rejected input");
    assert_eq!(compress_to_vec(&src), Err(Lz77Error::InvalidArgument));
}

#[test]
fn bound_saturates_instead_of_overflowing() {
    assert_eq!(compress_bound(usize::MAX), usize::MAX);
    assert_eq!(compress_bound(usize::MAX / 2), usize::MAX);
}

#[test]
fn error_values_render_and_convert() {
    let e: Box<dyn std::error::Error> = Box::new(Lz77Error::OutputExhausted);
    assert!(!e.to_string().is_empty());
    let any: anyhow::Error = Lz77Error::InvalidArgument.into();
    assert_eq!(any.downcast_ref::<Lz77Error>(), Some(&Lz77Error::InvalidArgument));
}

// ─────────────────────────────────────────────────────────────────────────────
// C entry points
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn abi_reports_codes() {
    let src = sample(64);
    let bound = GBA_LZ77CompressBound(src.len());
    let mut dst = vec![0u8; bound];

    let rc = unsafe { GBA_LZ77Compress(src.as_ptr(), src.len(), dst.as_mut_ptr(), 3) };
    assert_eq!(rc, LZ77_E_DSTFULL);

    let rc = unsafe { GBA_LZ77Compress(std::ptr::null(), 4, dst.as_mut_ptr(), dst.len()) };
    assert_eq!(rc, LZ77_E_BADARGS);

    let rc = unsafe { GBA_LZ77Compress(src.as_ptr(), src.len(), std::ptr::null_mut(), 16) };
    assert_eq!(rc, LZ77_E_BADARGS);

    let rc = unsafe { GBA_LZ77Compress(src.as_ptr(), src.len(), dst.as_mut_ptr(), dst.len()) };
    assert!(rc > 0);
    assert_eq!(&dst[..rc as usize], compress_to_vec(&src).unwrap().as_slice());
}

// ─────────────────────────────────────────────────────────────────────────────
// File layer
// ─────────────────────────────────────────────────────────────────────────────

fn raw_prefs() -> Prefs {
    let mut prefs = Prefs::new();
    prefs.set_format(OutputFormat::Raw);
    prefs
}

#[test]
fn missing_input_is_reported_with_its_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.bin");
    let err = compress_filename(&missing, &raw_prefs()).unwrap_err();
    assert!(format!("{err:#}").contains("absent.bin"));
    assert!(!dir.path().join("absent.lz77").exists());
}

#[test]
fn existing_output_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("a.bin");
    fs::write(&input, sample(100)).unwrap();
    fs::write(dir.path().join("a.lz77"), b"keep").unwrap();

    let err = compress_filename(&input, &raw_prefs()).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read(dir.path().join("a.lz77")).unwrap(), b"keep");
}

#[test]
fn batch_keeps_going_after_a_failure() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.bin");
    fs::write(&good, sample(200)).unwrap();
    let inputs = vec![dir.path().join("nope.bin"), good.clone()];

    let results = compress_multiple_filenames(&inputs, &raw_prefs()).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_err());
    let report = results[1].as_ref().unwrap();
    assert_eq!(report.input, good);
    assert!(dir.path().join("good.lz77").exists());
}

#[test]
fn destination_must_be_a_directory() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("plain");
    fs::write(&file, b"").unwrap();

    let mut prefs = raw_prefs();
    prefs.set_destination(Some(file));
    assert!(prefs.validate().is_err());

    prefs.set_destination(Some(dir.path().join("missing")));
    assert!(prefs.validate().is_err());

    prefs.set_destination(Some(dir.path().to_path_buf()));
    assert!(prefs.validate().is_ok());
}
