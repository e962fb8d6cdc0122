// Unit tests for block::types — format constants, token sizes, match packing
// and the header word.

use gbalz77::block::types::{
    decoded_len, encode_match, is_lz77_header, stream_header, Token, DISTANCE_MASK,
    FLAG_GROUP_SIZE, LZ77_DISTANCE_MAX, LZ77_HEADER_SIZE, LZ77_HEADER_TAG, LZ77_MAX_INPUT_SIZE,
    MAX_MATCH, MIN_MATCH, MIN_SEARCH_DISTANCE, STREAM_ALIGNMENT,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn constants_match_bios_format() {
    assert_eq!(LZ77_HEADER_TAG, 0x10);
    assert_eq!(LZ77_HEADER_SIZE, 4);
    assert_eq!(LZ77_MAX_INPUT_SIZE, 0xFF_FFFF);
    assert_eq!(STREAM_ALIGNMENT, 4);
    assert_eq!(FLAG_GROUP_SIZE, 8);
    assert_eq!(MIN_MATCH, 3);
    assert_eq!(MAX_MATCH, 18);
    assert_eq!(LZ77_DISTANCE_MAX, 4096);
    assert_eq!(DISTANCE_MASK, 0xFFF);
}

#[test]
fn search_window_starts_at_eight() {
    assert_eq!(MIN_SEARCH_DISTANCE, 8);
}

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn literal_token_sizes() {
    let t = Token::Literal(0xAB);
    assert_eq!(t.input_len(), 1);
    assert_eq!(t.encoded_len(), 1);
}

#[test]
fn match_token_sizes() {
    let t = Token::Match { length: 18, distance: 4096 };
    assert_eq!(t.input_len(), 18);
    assert_eq!(t.encoded_len(), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// encode_match
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_match_length_four_distance_eight() {
    // (4-3)<<4 | (7>>8) = 0x10, 7 & 0xFF = 0x07
    assert_eq!(encode_match(4, 8), [0x10, 0x07]);
}

#[test]
fn encode_match_shortest_and_nearest() {
    assert_eq!(encode_match(3, 1), [0x00, 0x00]);
}

#[test]
fn encode_match_longest_and_farthest() {
    // (18-3)=15 → 0xF0; 4095 = 0xFFF → high nibble 0xF, low byte 0xFF
    assert_eq!(encode_match(18, 4096), [0xFF, 0xFF]);
}

#[test]
fn encode_match_splits_distance_across_bytes() {
    // distance 0x235 → encoded 0x234
    assert_eq!(encode_match(5, 0x235), [0x22, 0x34]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn header_for_empty_input() {
    assert_eq!(stream_header(0), 0x10);
}

#[test]
fn header_carries_length_in_upper_24_bits() {
    let h = stream_header(0x12_3456);
    assert_eq!(h, 0x1234_5610);
    assert_eq!(decoded_len(h), 0x12_3456);
    assert!(is_lz77_header(h));
}

#[test]
fn header_at_max_input_size() {
    let h = stream_header(LZ77_MAX_INPUT_SIZE);
    assert_eq!(h, 0xFFFF_FF10);
    assert_eq!(decoded_len(h), LZ77_MAX_INPUT_SIZE);
}

#[test]
fn foreign_header_is_not_lz77() {
    // Huffman (0x20) and RLE (0x30) BIOS streams use other tags.
    assert!(!is_lz77_header(0x0000_0120));
    assert!(!is_lz77_header(0x0000_0130));
}
