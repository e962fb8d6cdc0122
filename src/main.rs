//! Binary entry point for the `gbalz` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`run`] expands directories, validates the destination, compresses
//!    every input on the worker pool and prints one line per file.
//!
//! Exit code 0 when every file succeeded, 1 otherwise.

use gbalz77::cli::args::{parse_args, ParsedArgs};
use gbalz77::cli::constants::{set_display_level, COMPRESSOR_NAME};
use gbalz77::io::compress_multiple_filenames;
use gbalz77::util::create_file_list;
use gbalz77::{display, displaylevel};

fn run(args: ParsedArgs) -> i32 {
    let ParsedArgs {
        prefs,
        inputs,
        recursive,
        display_level,
    } = args;
    set_display_level(display_level);

    displaylevel!(
        4,
        "*** {} v{} {}-bit ***\n",
        COMPRESSOR_NAME,
        gbalz77::VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8
    );

    let files = match create_file_list(&inputs, recursive) {
        Ok(files) => files,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", COMPRESSOR_NAME, e);
            return 1;
        }
    };
    if files.is_empty() {
        displaylevel!(1, "{}: no input files\n", COMPRESSOR_NAME);
        return 1;
    }

    if let Err(e) = prefs.validate() {
        displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
        return 1;
    }

    displaylevel!(
        4,
        "format : {:?}, files : {}, workers : {}\n",
        prefs.format,
        files.len(),
        prefs.nb_workers
    );

    let results = match compress_multiple_filenames(&files, &prefs) {
        Ok(results) => results,
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            return 1;
        }
    };

    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(report) => {
                displaylevel!(
                    2,
                    "{:<24} : {:>8} → {:>8} bytes ({:6.2}%)\n",
                    report.input.display(),
                    report.input_len,
                    report.compressed_len,
                    report.ratio_percent()
                );
                for out in &report.outputs {
                    displaylevel!(3, "    wrote {}\n", out.display());
                }
            }
            Err(e) => {
                failures += 1;
                displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            }
        }
    }

    if failures > 0 {
        displaylevel!(2, "{} of {} files failed\n", failures, files.len());
        1
    } else {
        0
    }
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => match e.downcast::<clap::Error>() {
            // --help / --version / usage errors keep clap's own formatting.
            Ok(clap_err) => clap_err.exit(),
            Err(e) => {
                display!("{}: {:#}\n", COMPRESSOR_NAME, e);
                std::process::exit(1);
            }
        },
    };
    std::process::exit(run(args));
}
