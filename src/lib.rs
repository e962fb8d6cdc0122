// gbalz77 — GBA BIOS-compatible LZ77 compressor

pub mod config;
pub mod util;
pub mod io;
pub mod block;
pub mod emit;
pub mod abi;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::compress::{compress, compress_bound, compress_to_vec, Lz77Error};
pub use block::types::{LZ77_DISTANCE_MAX, LZ77_MAX_INPUT_SIZE, MIN_SEARCH_DISTANCE};
