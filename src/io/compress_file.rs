//! Compress one file and write its artifacts.
//!
//! Output names are derived from the input stem: `Sprite1.bin` becomes
//! `Sprite1.lz77` (raw) or `Sprite1.c` / `Sprite1.h`, placed in
//! [`Prefs::destination`] or beside the input.  All target paths are checked
//! against the overwrite policy before anything is written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};

use crate::block::compress_to_vec;
use crate::config::{C_HEADER_EXTENSION, C_SOURCE_EXTENSION, RAW_EXTENSION};
use crate::emit::{c_header, c_source, symbol_name};
use crate::io::prefs::Prefs;

/// Outcome of compressing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub input_len: usize,
    pub compressed_len: usize,
    /// Files written, in the order raw, `.c`, `.h`.
    pub outputs: Vec<PathBuf>,
}

impl FileReport {
    /// Compressed size as a percentage of the input; 0 for an empty input.
    pub fn ratio_percent(&self) -> f64 {
        if self.input_len == 0 {
            0.0
        } else {
            self.compressed_len as f64 * 100.0 / self.input_len as f64
        }
    }
}

fn file_stem(input: &Path) -> anyhow::Result<&str> {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("{}: file name is not valid UTF-8", input.display()))
}

/// Paths that [`compress_filename`] would write for `input`.
pub fn output_paths(input: &Path, prefs: &Prefs) -> anyhow::Result<Vec<PathBuf>> {
    let stem = file_stem(input)?;
    let dir = match &prefs.destination {
        Some(d) => d.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let mut paths = Vec::with_capacity(2);
    if prefs.format.writes_raw() {
        paths.push(dir.join(format!("{stem}.{RAW_EXTENSION}")));
    }
    if prefs.format.writes_source() {
        paths.push(dir.join(format!("{stem}.{C_SOURCE_EXTENSION}")));
    }
    if prefs.format.writes_header() {
        paths.push(dir.join(format!("{stem}.{C_HEADER_EXTENSION}")));
    }
    Ok(paths)
}

/// Read `input`, compress it, and write the artifacts selected by `prefs`.
pub fn compress_filename(input: &Path, prefs: &Prefs) -> anyhow::Result<FileReport> {
    let outputs = output_paths(input, prefs)?;
    if !prefs.overwrite {
        if let Some(existing) = outputs.iter().find(|p| p.exists()) {
            bail!("{} already exists; use -f to overwrite", existing.display());
        }
    }

    let data = fs::read(input).with_context(|| format!("cannot read {}", input.display()))?;
    let compressed =
        compress_to_vec(&data).with_context(|| format!("cannot compress {}", input.display()))?;

    let symbol = match &prefs.symbol {
        Some(s) => symbol_name(s),
        None => symbol_name(file_stem(input)?),
    };

    for path in &outputs {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let result = match ext {
            RAW_EXTENSION => fs::write(path, &compressed),
            C_SOURCE_EXTENSION => fs::write(path, c_source(&symbol, &compressed)),
            _ => fs::write(path, c_header(&symbol, data.len(), compressed.len())),
        };
        result.with_context(|| format!("cannot write {}", path.display()))?;
    }

    Ok(FileReport {
        input: input.to_path_buf(),
        input_len: data.len(),
        compressed_len: compressed.len(),
        outputs,
    })
}
