//! File list construction with optional recursive directory expansion.
//!
//! Given a mixed list of file and directory paths, [`create_file_list`]
//! returns a flat `Vec<PathBuf>` of files to compress. Directories are walked
//! with the [`walkdir`] crate when `recursive` is set and rejected otherwise.
//!
//! **Symlink handling**: `walkdir` runs with its default `follow_links(false)`,
//! so symlink entries inside a walked directory are skipped. A symlink passed
//! directly as an input is forwarded as-is.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand `inputs` into a flat list of regular files.
///
/// - Non-directory paths are forwarded unchanged; no existence check is done
///   here, a missing file surfaces as a read error later.
/// - Directories are walked in file-name order when `recursive` is `true`;
///   otherwise they produce an `InvalidInput` error.
/// - The first unreadable directory entry aborts the walk.
pub fn create_file_list<P: AsRef<Path>>(inputs: &[P], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if !input.is_dir() {
            result.push(input.to_path_buf());
            continue;
        }
        if !recursive {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: is a directory (use -r to recurse)", input.display()),
            ));
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.io_error()
                    .map(|io| io::Error::new(io.kind(), io.to_string()))
                    .unwrap_or_else(|| io::Error::other(e.to_string()))
            })?;
            if entry.file_type().is_file() {
                result.push(entry.into_path());
            }
        }
    }
    Ok(result)
}
