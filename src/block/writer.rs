//! Output primitives: a capacity-checked cursor and the flag-byte packer.
//!
//! Every byte of a stream passes through [`OutputCursor`], so a short
//! destination is detected at the first write that would not fit.
//! [`FlagGroup`] reserves a flag byte ahead of each run of up to eight
//! tokens and patches it once the run is complete.

use super::compress::Lz77Error;
use super::types::{encode_match, Token, FLAG_GROUP_SIZE};

// ─────────────────────────────────────────────────────────────────────────────
// OutputCursor
// ─────────────────────────────────────────────────────────────────────────────

/// Append cursor over a caller-owned destination buffer.
///
/// Each primitive write checks the remaining capacity first and writes
/// nothing when it does not fit.
pub struct OutputCursor<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> OutputCursor<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, pos: 0 }
    }

    /// Bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.dst.len() - self.pos
    }

    #[inline]
    pub fn put_u8(&mut self, value: u8) -> Result<(), Lz77Error> {
        if self.pos >= self.dst.len() {
            return Err(Lz77Error::OutputExhausted);
        }
        self.dst[self.pos] = value;
        self.pos += 1;
        Ok(())
    }

    /// Append `bytes` in full, or nothing.
    #[inline]
    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<(), Lz77Error> {
        if bytes.len() > self.remaining() {
            return Err(Lz77Error::OutputExhausted);
        }
        self.dst[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    #[inline]
    pub fn put_u32_le(&mut self, value: u32) -> Result<(), Lz77Error> {
        self.put_slice(&value.to_le_bytes())
    }

    /// Overwrite a byte that was already written.
    ///
    /// `at` must be below [`position`](Self::position).
    #[inline]
    pub fn patch(&mut self, at: usize, value: u8) {
        debug_assert!(at < self.pos, "patch past the write cursor");
        self.dst[at] = value;
    }

    /// Append zero bytes until the position is a multiple of `alignment`.
    pub fn pad_to(&mut self, alignment: usize) -> Result<(), Lz77Error> {
        while self.pos % alignment != 0 {
            self.put_u8(0)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FlagGroup
// ─────────────────────────────────────────────────────────────────────────────

/// Placeholder stored in a reserved flag slot until the group is flushed.
const FLAG_PLACEHOLDER: u8 = 0x00;

/// In-progress flag byte for the current group of up to eight tokens.
#[derive(Debug, Default)]
pub struct FlagGroup {
    flags: u8,
    count: u8,
    flag_pos: usize,
}

impl FlagGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no token is waiting for its flag byte.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Write `token`, reserving a flag byte first if it opens a new group.
    ///
    /// Either the token (and its flag slot, when one is opened) is written in
    /// full or nothing is.  The group is flushed automatically after its
    /// eighth token.
    pub fn push(&mut self, out: &mut OutputCursor<'_>, token: Token) -> Result<(), Lz77Error> {
        let needed = token.encoded_len() + usize::from(self.is_empty());
        if out.remaining() < needed {
            return Err(Lz77Error::OutputExhausted);
        }

        if self.is_empty() {
            self.flag_pos = out.position();
            out.put_u8(FLAG_PLACEHOLDER)?;
        }

        match token {
            Token::Literal(byte) => out.put_u8(byte)?,
            Token::Match { length, distance } => {
                out.put_slice(&encode_match(length, distance))?;
                self.flags |= 0x80 >> self.count;
            }
        }

        self.count += 1;
        if self.count == FLAG_GROUP_SIZE {
            self.flush(out);
        }
        Ok(())
    }

    /// Store the accumulated flag byte into its reserved slot and reset.
    ///
    /// A no-op when no token is pending.
    pub fn flush(&mut self, out: &mut OutputCursor<'_>) {
        if self.is_empty() {
            return;
        }
        out.patch(self.flag_pos, self.flags);
        self.flags = 0;
        self.count = 0;
    }
}
