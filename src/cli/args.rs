// cli/args.rs — command-line definition and conversion into runtime options.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::bail;
use clap::{ArgAction, Parser};

use crate::config::NB_WORKERS_DEFAULT;
use crate::io::prefs::{OutputFormat, Prefs};

/// Compress files into GBA BIOS LZ77 streams and emit them as C arrays.
#[derive(Parser, Debug)]
#[command(name = "gbalz", version, about)]
pub struct Cli {
    /// Files (or directories with -r) to compress.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving the outputs (default: next to each input).
    #[arg(short = 'o', long = "destination", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Artifacts to write for each input.
    #[arg(short = 'F', long = "format", value_enum, default_value_t = OutputFormat::Both)]
    pub format: OutputFormat,

    /// C symbol prefix (single input only; default: input file stem).
    #[arg(short = 'n', long = "name", value_name = "SYMBOL")]
    pub symbol: Option<String>,

    /// Overwrite existing outputs.
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Recurse into directories.
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Worker threads (0 = one per core).
    #[arg(short = 'T', long = "threads", default_value_t = NB_WORKERS_DEFAULT)]
    pub threads: usize,

    /// Increase verbosity (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable).
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

/// Everything `main` needs after parsing.
#[derive(Debug)]
pub struct ParsedArgs {
    pub prefs: Prefs,
    pub inputs: Vec<PathBuf>,
    pub recursive: bool,
    pub display_level: u32,
}

/// Parse the process arguments.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    parse_args_from(std::env::args_os())
}

/// Parse an explicit argument vector (`argv[0]` included).
///
/// `--help` and `--version` come back as a `clap::Error` inside the
/// `anyhow::Error`; callers downcast and `exit()` it.
pub fn parse_args_from<I, T>(argv: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;

    if cli.symbol.is_some() && (cli.inputs.len() > 1 || cli.recursive) {
        bail!("bad usage: --name requires a single input file");
    }

    let mut prefs = Prefs::new();
    prefs.set_format(cli.format);
    prefs.set_destination(cli.destination);
    prefs.set_overwrite(cli.force);
    prefs.set_symbol(cli.symbol);
    prefs.set_nb_workers(cli.threads);

    let display_level = (2u32 + cli.verbose as u32).saturating_sub(cli.quiet as u32);

    Ok(ParsedArgs {
        prefs,
        inputs: cli.inputs,
        recursive: cli.recursive,
        display_level,
    })
}
