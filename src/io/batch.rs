//! Parallel compression of several files.
//!
//! Each file is independent (the encoder keeps no state between calls), so
//! inputs are spread over a dedicated `rayon` pool.  Results come back in
//! input order regardless of completion order; one failing file does not
//! stop the others.
//!
//! Before the pool starts, every input's output paths are claimed up front.
//! Inputs that would write the same file (for example `a/x.bin` and
//! `b/x.bin` with one destination directory) all fail without touching the
//! disk, whatever the overwrite setting.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use rayon::prelude::*;

use crate::io::compress_file::{compress_filename, output_paths, FileReport};
use crate::io::prefs::Prefs;
use crate::util::count_cores;

/// Compress every path in `inputs` with `prefs`.
///
/// The outer `Err` is reserved for failing to start the worker pool; per-file
/// failures are returned in the corresponding slot.
pub fn compress_multiple_filenames(
    inputs: &[PathBuf],
    prefs: &Prefs,
) -> anyhow::Result<Vec<anyhow::Result<FileReport>>> {
    let conflicts = find_output_conflicts(inputs, prefs);

    let workers = match prefs.nb_workers {
        0 => count_cores(),
        n => n,
    }
    .min(inputs.len().max(1));

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("gbalz-worker-{i}"))
        .build()
        .context("cannot start worker pool")?;

    Ok(pool.install(|| {
        inputs
            .par_iter()
            .zip(conflicts.par_iter())
            .map(|(input, conflict)| match conflict {
                Some(msg) => Err(anyhow!("{}: {msg}", input.display())),
                None => compress_filename(input, prefs),
            })
            .collect()
    }))
}

/// For each input, a description of the output it shares with another
/// input, or `None` when its outputs are its own.
///
/// Inputs whose output paths cannot be derived are left to
/// [`compress_filename`], which reports the same error.
fn find_output_conflicts(inputs: &[PathBuf], prefs: &Prefs) -> Vec<Option<String>> {
    let mut owners: HashMap<PathBuf, usize> = HashMap::new();
    let mut conflicts: Vec<Option<String>> = vec![None; inputs.len()];

    for (idx, input) in inputs.iter().enumerate() {
        let Ok(paths) = output_paths(input, prefs) else {
            continue;
        };
        for path in paths {
            match owners.entry(output_key(&path)) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(slot) if *slot.get() != idx => {
                    let first = *slot.get();
                    conflicts[first].get_or_insert_with(|| {
                        format!("{} would also be written for {}", path.display(), input.display())
                    });
                    conflicts[idx].get_or_insert_with(|| {
                        format!(
                            "{} would also be written for {}",
                            path.display(),
                            inputs[first].display()
                        )
                    });
                }
                Entry::Occupied(_) => {}
            }
        }
    }
    conflicts
}

/// Comparable form of an output path: the parent directory is resolved when
/// it exists, so `x.lz77` and `./x.lz77` compare equal.
fn output_key(path: &Path) -> PathBuf {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    match (fs::canonicalize(dir), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
