// config.rs — Compile-time configuration constants for the `gbalz` tool.
//
// Format constants (header tag, window, match lengths) live in
// `block::types`; this file only holds defaults of the file layer and CLI.

// Default number of worker threads.
// 0 = one worker per logical core (see `util::count_cores`).
// Can be overridden by the -T# command-line flag.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Maximum number of compression worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

// Extension of the binary stream written by `--format raw`.
pub const RAW_EXTENSION: &str = "lz77";

// Extensions of the generated C translation unit and header.
pub const C_SOURCE_EXTENSION: &str = "c";
pub const C_HEADER_EXTENSION: &str = "h";
