//! GBA LZ77 compression — one-shot API.
//!
//! | Rust function        | Exported C symbol           |
//! |----------------------|-----------------------------|
//! | [`compress_bound`]   | `GBA_LZ77CompressBound`     |
//! | [`compress`]         | `GBA_LZ77Compress`          |
//! | [`compress_to_vec`]  | —                           |
//!
//! The encoder is greedy: at each input position it asks
//! [`select_token`] for a literal or a match, hands the token to a
//! [`FlagGroup`], and advances by the token's input length.  There is no
//! hashing and no lazy evaluation, so the output is a deterministic function
//! of the input alone.
//!
//! Capacity-exceeded conditions are signalled as
//! [`Err(Lz77Error::OutputExhausted)`](Lz77Error::OutputExhausted); the
//! destination contents are unspecified after any error.

use core::fmt;

use super::search::select_token;
use super::types::{
    decoded_len, is_lz77_header, stream_header, LZ77_HEADER_SIZE, LZ77_MAX_INPUT_SIZE,
    STREAM_ALIGNMENT,
};
use super::writer::{FlagGroup, OutputCursor};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// C return code for bad arguments.
pub const LZ77_E_BADARGS: isize = -1;

/// C return code for a destination that is too small.
pub const LZ77_E_DSTFULL: isize = -3;

/// Errors returned by the compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lz77Error {
    /// Absent buffer with a nonzero length, or an input longer than
    /// [`LZ77_MAX_INPUT_SIZE`].
    InvalidArgument,
    /// The destination is too small for the header, payload, or padding.
    OutputExhausted,
}

impl Lz77Error {
    /// Negative sentinel used at the C boundary.
    #[inline]
    pub fn code(self) -> isize {
        match self {
            Lz77Error::InvalidArgument => LZ77_E_BADARGS,
            Lz77Error::OutputExhausted => LZ77_E_DSTFULL,
        }
    }

    /// Map a C return value back to an error.  `None` for non-negative
    /// (success) values and unknown codes.
    pub fn from_code(code: isize) -> Option<Self> {
        match code {
            LZ77_E_BADARGS => Some(Lz77Error::InvalidArgument),
            LZ77_E_DSTFULL => Some(Lz77Error::OutputExhausted),
            _ => None,
        }
    }
}

impl fmt::Display for Lz77Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lz77Error::InvalidArgument => f.write_str("invalid argument"),
            Lz77Error::OutputExhausted => f.write_str("destination buffer is too small"),
        }
    }
}

impl std::error::Error for Lz77Error {}

// ─────────────────────────────────────────────────────────────────────────────
// Utility
// ─────────────────────────────────────────────────────────────────────────────

/// Destination size that always suffices for `input_size` bytes.
///
/// Header + two bytes per input byte + up to three padding bytes.  The true
/// worst case (all literals) is `4 + n + ceil(n / 8)` before padding, so this
/// is generous.  Saturates instead of overflowing.
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    input_size
        .saturating_mul(2)
        .saturating_add(LZ77_HEADER_SIZE + STREAM_ALIGNMENT - 1)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compression
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst`.
///
/// Returns the total number of bytes written (header, tokens and padding;
/// always a multiple of 4).  `dst` should hold at least
/// [`compress_bound`]`(src.len())` bytes.
pub fn compress(src: &[u8], dst: &mut [u8]) -> Result<usize, Lz77Error> {
    if src.len() > LZ77_MAX_INPUT_SIZE {
        return Err(Lz77Error::InvalidArgument);
    }

    let header = stream_header(src.len());
    debug_assert!(is_lz77_header(header) && decoded_len(header) == src.len());

    let mut out = OutputCursor::new(dst);
    out.put_u32_le(header)?;

    let mut group = FlagGroup::new();
    let mut ip = 0usize;
    while ip < src.len() {
        let token = select_token(src, ip);
        group.push(&mut out, token)?;
        ip += token.input_len();
    }
    group.flush(&mut out);

    out.pad_to(STREAM_ALIGNMENT)?;
    Ok(out.position())
}

/// Compress `src` into a freshly allocated, exactly-sized `Vec`.
pub fn compress_to_vec(src: &[u8]) -> Result<Vec<u8>, Lz77Error> {
    if src.len() > LZ77_MAX_INPUT_SIZE {
        return Err(Lz77Error::InvalidArgument);
    }
    let mut dst = vec![0u8; compress_bound(src.len())];
    let written = compress(src, &mut dst)?;
    dst.truncate(written);
    Ok(dst)
}
