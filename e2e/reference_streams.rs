//! E2E Test Suite 01: Reference Streams
//!
//! Feeds a range of inputs through the compressor and checks every produced
//! stream with an independent parser that follows the GBA BIOS LZ77 rules:
//! - the stream expands back to the exact input
//! - every match lies in the window [8, 4096] with length in [3, 18]
//! - unused flag bits of the last group and all padding bytes are zero
//! - the total length is the parsed length rounded up to 4
//!
//! The parser lives only here; the crate ships no decoder.

use gbalz77::block::{decoded_len, is_lz77_header};
use gbalz77::{compress_bound, compress_to_vec};

// ─────────────────────────────────────────────────────────────────────────────
// Reference parser
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default, Debug)]
struct Parsed {
    data: Vec<u8>,
    literals: usize,
    matches: usize,
    /// Offset just past the last token.
    end: usize,
}

fn parse_stream(stream: &[u8]) -> Parsed {
    assert!(stream.len() >= 4, "stream shorter than its header");
    let header = u32::from_le_bytes([stream[0], stream[1], stream[2], stream[3]]);
    assert!(is_lz77_header(header), "bad tag byte");
    let n = decoded_len(header);

    let mut p = Parsed { data: Vec::with_capacity(n), ..Parsed::default() };
    let mut pos = 4usize;
    while p.data.len() < n {
        let flags = stream[pos];
        pos += 1;
        for bit in 0..8 {
            if p.data.len() >= n {
                assert_eq!(flags & (0xFF >> bit), 0, "unused flag bits must be zero");
                break;
            }
            if flags & (0x80 >> bit) != 0 {
                let (b1, b2) = (stream[pos], stream[pos + 1]);
                pos += 2;
                let len = (b1 >> 4) as usize + 3;
                let dist = (((b1 & 0x0F) as usize) << 8 | b2 as usize) + 1;
                assert!((8..=4096).contains(&dist), "distance {dist} outside window");
                assert!(dist <= p.data.len(), "distance {dist} before start of output");
                assert!(p.data.len() + len <= n, "match overruns decoded length");
                for _ in 0..len {
                    let b = p.data[p.data.len() - dist];
                    p.data.push(b);
                }
                p.matches += 1;
            } else {
                p.data.push(stream[pos]);
                pos += 1;
                p.literals += 1;
            }
        }
    }
    p.end = pos;
    p
}

fn check_round_trip(src: &[u8]) -> Parsed {
    let stream = compress_to_vec(src).expect("compression must succeed");
    assert!(stream.len() <= compress_bound(src.len()));
    assert_eq!(stream.len() % 4, 0);

    let parsed = parse_stream(&stream);
    assert_eq!(parsed.data, src, "stream does not expand to the input");
    assert_eq!(stream.len(), parsed.end.div_ceil(4) * 4);
    assert!(stream[parsed.end..].iter().all(|&b| b == 0), "padding must be zero");
    parsed
}

// ─────────────────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────────────────

fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut s = seed;
    (0..len)
        .map(|_| {
            s ^= s << 13;
            s ^= s >> 7;
            s ^= s << 17;
            s as u8
        })
        .collect()
}

/// 4bpp 8×8 tiles: 32 bytes each, built from a handful of row patterns.
fn tile_sheet(tiles: usize) -> Vec<u8> {
    let rows: [[u8; 4]; 5] = [
        [0x00, 0x00, 0x00, 0x00],
        [0x11, 0x11, 0x11, 0x11],
        [0x12, 0x21, 0x12, 0x21],
        [0x00, 0x33, 0x33, 0x00],
        [0x45, 0x54, 0x45, 0x54],
    ];
    let mut out = Vec::with_capacity(tiles * 32);
    for t in 0..tiles {
        for r in 0..8 {
            out.extend_from_slice(&rows[(t * 3 + r * (t % 4 + 1)) % rows.len()]);
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input() {
    let p = check_round_trip(&[]);
    assert_eq!(p.literals + p.matches, 0);
}

#[test]
fn short_inputs_of_every_length() {
    for len in 0..=40 {
        check_round_trip(&vec![0xA5u8; len]);
        check_round_trip(&noise(len, len as u64 + 1));
    }
}

#[test]
fn inputs_shorter_than_eleven_bytes_are_all_literal() {
    // The first match needs offset ≥ 8 and three bytes left.
    for len in 0..11 {
        let p = check_round_trip(&vec![0u8; len]);
        assert_eq!(p.matches, 0, "len {len}");
    }
    assert_eq!(check_round_trip(&[0u8; 11]).matches, 1);
}

#[test]
fn zero_fill() {
    let p = check_round_trip(&vec![0u8; 5000]);
    // 8 literals, then almost entirely 18-byte matches.
    assert!(p.matches >= (5000 - 8) / 18);
}

#[test]
fn incompressible_noise() {
    check_round_trip(&noise(6000, 0x9E37_79B9_7F4A_7C15));
}

#[test]
fn english_text() {
    let text = b"It was the best of times, it was the worst of times, it was the age of \
        wisdom, it was the age of foolishness, it was the epoch of belief, it was the \
        epoch of incredulity, it was the season of Light, it was the season of Darkness.";
    let src = text.repeat(8);
    let p = check_round_trip(&src);
    assert!(p.matches > 0);
}

#[test]
fn tile_data() {
    let src = tile_sheet(96);
    let stream = compress_to_vec(&src).unwrap();
    check_round_trip(&src);
    assert!(stream.len() < src.len() / 2);
}

#[test]
fn short_period_repeats() {
    for period in 1..=12 {
        let src: Vec<u8> = (0..500).map(|i| (i % period) as u8 + 0x40).collect();
        check_round_trip(&src);
    }
}

#[test]
fn repeat_beyond_window_is_not_referenced() {
    // The second copy of the block starts 5000 bytes after the first.
    let block = noise(64, 3);
    let mut src = block.clone();
    src.extend(noise(5000 - 64, 4));
    src.extend_from_slice(&block);
    check_round_trip(&src);
}

#[test]
fn repeat_at_window_edge() {
    let block = noise(32, 5);
    let mut src = block.clone();
    src.extend(noise(4096 - 32, 6));
    src.extend_from_slice(&block);
    let p = check_round_trip(&src);
    assert!(p.matches >= 1);
}

#[test]
fn mixed_32k() {
    let mut src = Vec::new();
    for i in 0..8u64 {
        match i % 3 {
            0 => src.extend(noise(4096, i + 10)),
            1 => src.extend(tile_sheet(128)),
            _ => src.extend(std::iter::repeat(i as u8).take(4096)),
        }
    }
    check_round_trip(&src);
}
