//! GBA LZ77 format constants, the token type, and header helpers.
//!
//! The stream layout understood by the GBA BIOS `LZ77UnCompWram` /
//! `LZ77UnCompVram` routines:
//!
//! ```text
//! [u32 LE: (decoded_len << 8) | 0x10]
//! { [flag byte] [up to 8 tokens, MSB of flag first] }*
//! [0x00 padding to a multiple of 4]
//! ```
//!
//! A literal token is one raw byte.  A match token is two bytes:
//! `((len - 3) << 4) | ((dist - 1) >> 8)` followed by `(dist - 1) & 0xFF`.

// ─────────────────────────────────────────────────────────────────────────────
// Stream constants
// ─────────────────────────────────────────────────────────────────────────────

/// Low byte of the header word: BIOS compression type 1 (LZ77), sub-type 0.
pub const LZ77_HEADER_TAG: u32 = 0x10;

/// Size of the header word in bytes.
pub const LZ77_HEADER_SIZE: usize = 4;

/// Largest input whose length still fits in the header's upper 24 bits.
pub const LZ77_MAX_INPUT_SIZE: usize = 0x00FF_FFFF;

/// Total stream length is zero-padded to this multiple.
pub const STREAM_ALIGNMENT: usize = 4;

/// Number of tokens described by one flag byte.
pub const FLAG_GROUP_SIZE: u8 = 8;

// ─────────────────────────────────────────────────────────────────────────────
// Match constants
// ─────────────────────────────────────────────────────────────────────────────

/// Shortest encodable match.
pub const MIN_MATCH: usize = 3;

/// Longest encodable match (4-bit length field, biased by 3).
pub const MAX_MATCH: usize = 18;

/// Nearest distance the match finder ever probes.
///
/// The decoder accepts distances from 1, but this encoder never emits
/// distances 1..=7. Changing this changes the byte-exact output.
pub const MIN_SEARCH_DISTANCE: usize = 8;

/// Farthest distance representable in the 12-bit distance field.
pub const LZ77_DISTANCE_MAX: usize = 4096;

/// Mask for the 12-bit encoded distance (`distance - 1`).
pub const DISTANCE_MASK: u16 = 0x0FFF;

// ─────────────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────────────

/// One unit of compressed output.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    /// A raw input byte.
    Literal(u8),
    /// Copy `length` bytes from `distance` bytes behind the output cursor.
    /// `length` is in `3..=18`, `distance` in `1..=4096`.
    Match { length: u8, distance: u16 },
}

impl Token {
    /// Number of input bytes this token covers.
    #[inline]
    pub fn input_len(&self) -> usize {
        match *self {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => length as usize,
        }
    }

    /// Number of bytes this token occupies in the stream (flag byte excluded).
    #[inline]
    pub fn encoded_len(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match { .. } => 2,
        }
    }
}

/// Pack a match into its two stream bytes.
///
/// Bits beyond the 4-bit length and 12-bit distance fields are masked off.
#[inline]
pub fn encode_match(length: u8, distance: u16) -> [u8; 2] {
    let encoded_len = (length.wrapping_sub(MIN_MATCH as u8)) & 0x0F;
    let encoded_dist = distance.wrapping_sub(1) & DISTANCE_MASK;
    [
        (encoded_len << 4) | ((encoded_dist >> 8) as u8 & 0x0F),
        (encoded_dist & 0xFF) as u8,
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

/// Build the header word for an input of `input_len` bytes.
///
/// Only the low 24 bits of `input_len` are kept; callers validate the length
/// against [`LZ77_MAX_INPUT_SIZE`] first.
#[inline]
pub fn stream_header(input_len: usize) -> u32 {
    (((input_len & LZ77_MAX_INPUT_SIZE) as u32) << 8) | LZ77_HEADER_TAG
}

/// Decoded length carried by a header word.
#[inline]
pub fn decoded_len(header: u32) -> usize {
    (header >> 8) as usize
}

/// Returns `true` when the header's low byte is the LZ77 tag.
#[inline]
pub fn is_lz77_header(header: u32) -> bool {
    header & 0xFF == LZ77_HEADER_TAG
}
