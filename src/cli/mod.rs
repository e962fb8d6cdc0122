//! Command-line interface for the `gbalz` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity and the `DISPLAY_LEVEL` global with its `display!` / `displaylevel!` macros. |
//! | [`args`]      | `clap` definition of the command line and its conversion into [`args::ParsedArgs`]. |
//!
//! Typical call sequence: `parse_args` → `Prefs::validate` → `io::compress_multiple_filenames`.

pub mod constants;
pub mod args;
