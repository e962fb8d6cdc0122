//! GBA LZ77 block compression.
//!
//! This module contains the stream encoder used for BIOS-decompressible
//! assets.  Leaf to root: [`search`] finds matches and picks tokens,
//! [`writer`] packs them behind flag bytes into a bounded buffer, and
//! [`compress`] drives both and frames the stream.

pub mod compress;
pub mod search;
pub mod types;
pub mod writer;

// Re-export the most important public API items at the module level.
pub use compress::{
    compress, compress_bound, compress_to_vec, Lz77Error, LZ77_E_BADARGS, LZ77_E_DSTFULL,
};
pub use search::{find_match, select_token};
pub use types::{
    decoded_len, encode_match, is_lz77_header, stream_header, Token, LZ77_DISTANCE_MAX,
    LZ77_HEADER_TAG, LZ77_MAX_INPUT_SIZE, MAX_MATCH, MIN_MATCH, MIN_SEARCH_DISTANCE,
};
pub use writer::{FlagGroup, OutputCursor};
