// prefs.rs — output preferences for file-level compression.
//
// A `Prefs` value is built once by the CLI and shared read-only by every
// worker; nothing in it is mutated while files are being compressed.

use std::path::PathBuf;

use anyhow::bail;
use clap::ValueEnum;

use crate::config::NB_WORKERS_MAX;

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

/// Which artifacts to write for each input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The compressed stream as a binary file.
    Raw,
    /// A C array definition only.
    C,
    /// A C header only.
    H,
    /// C source and header.
    #[default]
    Both,
}

impl OutputFormat {
    #[inline]
    pub fn writes_raw(self) -> bool {
        self == OutputFormat::Raw
    }

    #[inline]
    pub fn writes_source(self) -> bool {
        matches!(self, OutputFormat::C | OutputFormat::Both)
    }

    #[inline]
    pub fn writes_header(self) -> bool {
        matches!(self, OutputFormat::H | OutputFormat::Both)
    }
}

// ---------------------------------------------------------------------------
// Prefs
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct Prefs {
    pub format: OutputFormat,
    /// Output directory; `None` writes next to each input.
    pub destination: Option<PathBuf>,
    /// Replace existing outputs.
    pub overwrite: bool,
    /// C symbol prefix; `None` derives it from the input file stem.
    pub symbol: Option<String>,
    /// Worker threads; 0 = one per core.
    pub nb_workers: usize,
}

impl Prefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_format(&mut self, format: OutputFormat) -> OutputFormat {
        self.format = format;
        format
    }

    pub fn set_destination(&mut self, dir: Option<PathBuf>) {
        self.destination = dir;
    }

    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        yes
    }

    pub fn set_symbol(&mut self, symbol: Option<String>) {
        self.symbol = symbol;
    }

    /// Clamped to `NB_WORKERS_MAX`; returns the stored value.
    pub fn set_nb_workers(&mut self, n: usize) -> usize {
        self.nb_workers = n.min(NB_WORKERS_MAX);
        self.nb_workers
    }

    /// Checks that the destination, if any, is an existing directory.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.destination {
            if !dir.exists() {
                bail!("output directory does not exist: `{}`", dir.display());
            }
            if !dir.is_dir() {
                bail!("output directory is not a directory: `{}`", dir.display());
            }
        }
        Ok(())
    }
}
