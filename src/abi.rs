//! C-ABI shims — export the two symbols the asset pipeline loads.
//!
//! The produced `libgbalz77.so` / `libgbalz77.a` can replace the original
//! `lz77.so` without changes on the caller side:
//!
//! ```c
//! size_t    GBA_LZ77CompressBound(size_t inputLength);
//! ptrdiff_t GBA_LZ77Compress(const uint8_t *in, size_t inputLength,
//!                            uint8_t *out, size_t out_cap);
//! ```

use std::slice;

use libc::{ptrdiff_t, size_t};

use crate::block::compress::{compress, compress_bound, Lz77Error};

// ─────────────────────────────────────────────────────────────────────────────
// GBA_LZ77CompressBound
//
// Returns a destination size that always suffices for inputLength bytes.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub extern "C" fn GBA_LZ77CompressBound(input_length: size_t) -> size_t {
    compress_bound(input_length)
}

// ─────────────────────────────────────────────────────────────────────────────
// GBA_LZ77Compress
//
// Returns the number of bytes written to out (header and padding included),
// -1 for bad arguments, or -3 when out_cap is too small.
// ─────────────────────────────────────────────────────────────────────────────

/// # Safety
/// `input` must be valid for reads of `input_length` bytes and `out` valid
/// for writes of `out_cap` bytes.  Either pointer may be null only when its
/// length is zero.
#[no_mangle]
pub unsafe extern "C" fn GBA_LZ77Compress(
    input: *const u8,
    input_length: size_t,
    out: *mut u8,
    out_cap: size_t,
) -> ptrdiff_t {
    if (input.is_null() && input_length != 0) || (out.is_null() && out_cap != 0) {
        return Lz77Error::InvalidArgument.code() as ptrdiff_t;
    }
    // from_raw_parts rejects null even for empty slices.
    let src: &[u8] = if input_length == 0 {
        &[]
    } else {
        slice::from_raw_parts(input, input_length)
    };
    let dst: &mut [u8] = if out_cap == 0 {
        &mut []
    } else {
        slice::from_raw_parts_mut(out, out_cap)
    };
    match compress(src, dst) {
        Ok(n) => n as ptrdiff_t,
        Err(e) => e.code() as ptrdiff_t,
    }
}
