//! Match search: a brute-force backward scan and the greedy token selector.
//!
//! | Rust function      | Role                                                     |
//! |--------------------|----------------------------------------------------------|
//! | [`find_match`]     | nearest prior run of exactly `length` bytes, or 0        |
//! | [`select_token`]   | probe lengths 3..=18, keep the last successful probe     |
//!
//! The scan starts at [`MIN_SEARCH_DISTANCE`] and walks away from the cursor
//! one byte at a time until [`LZ77_DISTANCE_MAX`] is passed.  Each length is
//! probed independently, so the distance kept for length `n + 1` may be
//! farther than the one found for length `n`.

use super::types::{Token, LZ77_DISTANCE_MAX, MAX_MATCH, MIN_MATCH, MIN_SEARCH_DISTANCE};

/// Distance to the nearest earlier occurrence of `src[offset..offset + length]`.
///
/// Candidates are tried at distances `8, 9, 10, …` up to `min(offset, 4096)`;
/// the first exact match wins.  Returns 0 when the run would extend past the
/// end of `src` or no candidate matches.
///
/// A candidate run may overlap the bytes being matched; the decoder copies
/// byte-by-byte so overlapping references are valid.
pub fn find_match(src: &[u8], offset: usize, length: usize) -> usize {
    let end = match offset.checked_add(length) {
        Some(end) if end <= src.len() => end,
        _ => return 0,
    };
    let needle = &src[offset..end];

    let farthest = offset.min(LZ77_DISTANCE_MAX);
    for distance in MIN_SEARCH_DISTANCE..=farthest {
        let candidate = offset - distance;
        if &src[candidate..candidate + length] == needle {
            return distance;
        }
    }
    0
}

/// Pick the token to emit at `offset`.
///
/// `offset` must be inside `src`.
pub fn select_token(src: &[u8], offset: usize) -> Token {
    let mut best: Option<(usize, usize)> = None;

    for length in MIN_MATCH..=MAX_MATCH {
        match find_match(src, offset, length) {
            0 => break,
            distance => best = Some((length, distance)),
        }
    }

    match best {
        Some((length, distance)) => Token::Match {
            length: length as u8,
            distance: distance as u16,
        },
        None => Token::Literal(src[offset]),
    }
}
