//! Utility module — CPU counting and input-path expansion.
//!
//! - [`cores`]     — logical core count for sizing the worker pool
//! - [`file_list`] — turning CLI paths into a flat list of regular files

pub mod cores;
pub mod file_list;

pub use cores::count_cores;
pub use file_list::create_file_list;
