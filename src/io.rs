//! File-level compression for the `gbalz` tool.
//!
//! The block engine never touches the filesystem; this layer reads input
//! files, runs [`compress_to_vec`](crate::block::compress_to_vec), and writes
//! the raw stream and/or C source and header next to the input or into a
//! destination directory.

pub mod batch;
pub mod compress_file;
pub mod prefs;

pub use batch::compress_multiple_filenames;
pub use compress_file::{compress_filename, output_paths, FileReport};
pub use prefs::{OutputFormat, Prefs};
