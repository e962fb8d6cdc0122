// Tests for cli::constants — identity strings and display level.

use gbalz77::cli::constants::{display_level, set_display_level, COMPRESSOR_NAME, DISPLAY_LEVEL};
use std::sync::atomic::Ordering;

#[test]
fn compressor_name() {
    assert_eq!(COMPRESSOR_NAME, "gbalz");
}

#[test]
fn display_level_setter_and_getter_agree() {
    let prev = display_level();
    set_display_level(4);
    assert_eq!(DISPLAY_LEVEL.load(Ordering::Relaxed), 4);
    assert_eq!(display_level(), 4);
    set_display_level(prev);
}

#[test]
fn displaylevel_macro_compiles_at_any_level() {
    let prev = display_level();
    set_display_level(0);
    gbalz77::displaylevel!(1, "suppressed {}\n", 1);
    set_display_level(prev);
}
