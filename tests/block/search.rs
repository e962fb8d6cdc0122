// Unit tests for block::search — the backward match scan and the greedy
// per-position token choice.
//
// Inputs are built from distinct filler bytes so that the only repeats are
// the ones each test plants on purpose.

use gbalz77::block::search::{find_match, select_token};
use gbalz77::block::types::{Token, LZ77_DISTANCE_MAX, MAX_MATCH};

/// `n` pairwise-distinct bytes starting at `start` (n ≤ 256 - start).
fn filler(start: u8, n: usize) -> Vec<u8> {
    (0..n).map(|i| start + i as u8).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// find_match — bounds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn run_past_end_of_input_is_no_match() {
    let src = [0u8; 10];
    // 8 + 3 > 10
    assert_eq!(find_match(&src, 8, 3), 0);
    assert_eq!(find_match(&src, 9, 3), 0);
}

#[test]
fn offset_overflow_is_no_match() {
    let src = [0u8; 4];
    assert_eq!(find_match(&src, usize::MAX, 3), 0);
}

#[test]
fn offsets_below_eight_never_match() {
    let src = [0x55u8; 32];
    for offset in 0..8 {
        assert_eq!(find_match(&src, offset, 3), 0, "offset {offset}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// find_match — search window
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn runs_of_one_byte_match_at_distance_eight_not_one() {
    let src = [0u8; 20];
    assert_eq!(find_match(&src, 8, 3), 8);
    assert_eq!(find_match(&src, 12, 3), 8);
}

#[test]
fn period_three_pattern_skips_distances_three_and_six() {
    let src: Vec<u8> = b"abc".iter().copied().cycle().take(24).collect();
    // "cab" at offset 8 only has a distance-8 candidate ("abc"): no match.
    assert_eq!(find_match(&src, 8, 3), 0);
    // "abc" at offset 9 matches offset 0 at distance 9, the first multiple of 3 ≥ 8.
    assert_eq!(find_match(&src, 9, 3), 9);
}

#[test]
fn nearest_candidate_wins() {
    let mut src = Vec::new();
    src.extend_from_slice(b"XYZ");
    src.extend(filler(0x80, 7));
    src.extend_from_slice(b"XYZ"); // at 10
    src.extend(filler(0x90, 7));
    src.extend_from_slice(b"XYZ"); // at 20
    assert_eq!(find_match(&src, 20, 3), 10);
}

#[test]
fn candidate_may_overlap_the_current_run() {
    let src = [7u8; 26];
    // Candidate at 0 covers 0..18, overlapping offset 8.
    assert_eq!(find_match(&src, 8, 18), 8);
}

#[test]
fn farthest_distance_is_4096() {
    let mut src = vec![0u8; LZ77_DISTANCE_MAX + 4];
    src[..3].copy_from_slice(b"ABC");
    src[LZ77_DISTANCE_MAX..LZ77_DISTANCE_MAX + 3].copy_from_slice(b"ABC");
    assert_eq!(find_match(&src, LZ77_DISTANCE_MAX, 3), LZ77_DISTANCE_MAX);
}

#[test]
fn distance_4097_is_out_of_window() {
    let mut src = vec![0u8; LZ77_DISTANCE_MAX + 5];
    src[..3].copy_from_slice(b"ABC");
    src[LZ77_DISTANCE_MAX + 1..LZ77_DISTANCE_MAX + 4].copy_from_slice(b"ABC");
    assert_eq!(find_match(&src, LZ77_DISTANCE_MAX + 1, 3), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// select_token
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn literal_when_nothing_matches() {
    let src = filler(0x20, 16);
    assert_eq!(select_token(&src, 0), Token::Literal(0x20));
    assert_eq!(select_token(&src, 12), Token::Literal(0x2C));
}

#[test]
fn literal_near_the_end_of_ten_zero_bytes() {
    let src = [0u8; 10];
    assert_eq!(select_token(&src, 8), Token::Literal(0));
    assert_eq!(select_token(&src, 9), Token::Literal(0));
}

#[test]
fn match_stops_growing_at_end_of_input() {
    // input[8..12) == input[0..4): lengths 3 and 4 match, 5 runs off the end.
    let mut src = filler(0x41, 8);
    let head = src[..4].to_vec();
    src.extend_from_slice(&head);
    assert_eq!(select_token(&src, 8), Token::Match { length: 4, distance: 8 });
}

#[test]
fn match_length_is_capped_at_eighteen() {
    let src = [0u8; 100];
    assert_eq!(
        select_token(&src, 8),
        Token::Match { length: MAX_MATCH as u8, distance: 8 }
    );
}

#[test]
fn each_length_is_probed_independently() {
    // WXYZ abcd WXYQ efgh WXYZ
    let src = b"WXYZabcdWXYQefghWXYZ";
    // Length 3 is found at distance 8 ("WXY" of "WXYQ") ...
    assert_eq!(find_match(src, 16, 3), 8);
    // ... length 4 only at distance 16.
    assert_eq!(find_match(src, 16, 4), 16);
    // The selector keeps the last successful probe.
    assert_eq!(select_token(src, 16), Token::Match { length: 4, distance: 16 });
}

#[test]
fn first_failed_length_ends_probing() {
    // Length 4 fails at every candidate, so the 3-byte match is kept.
    let mut src = Vec::new();
    src.extend_from_slice(b"PQRST"); // 0..5
    src.extend(filler(0x80, 3)); // 5..8
    src.extend_from_slice(b"PQR"); // 8..11
    src.extend(filler(0x90, 5)); // 11..16
    src.extend_from_slice(b"PQRxT"); // 16..21, 'x' breaks length 4
    assert_eq!(select_token(&src, 16), Token::Match { length: 3, distance: 8 });
}
