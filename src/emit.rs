//! C source and header text for embedding a compressed stream in a GBA build.
//!
//! The generated pair looks like:
//!
//! ```c
//! // Sprite1.h
//! #define Sprite1Len 2048
//! #define Sprite1CompressedLen 612
//! extern const unsigned char Sprite1Compression[612];
//!
//! // Sprite1.c
//! const unsigned char Sprite1Compression[612] __attribute__((aligned(4))) ...=
//! {
//! 	0x10, 0x00, 0x08, 0x00, ...,
//! };
//! ```
//!
//! The stream must stay 4-byte aligned in ROM because the BIOS reads the
//! header as a word.

/// Values per line in the emitted array.
pub const BYTES_PER_LINE: usize = 8;

/// A blank line is inserted after this many array lines.
pub const LINES_PER_BLOCK: usize = 8;

/// Suffix of the array symbol.
pub const ARRAY_SUFFIX: &str = "Compression";

/// Turn a file stem into a valid C identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`; a leading digit (or an
/// empty stem) gets a `_` prefix.
pub fn symbol_name(stem: &str) -> String {
    let mut sym: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if sym.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        sym.insert(0, '_');
    }
    sym
}

/// Definition of `{symbol}Compression[]` holding `bytes`.
pub fn c_source(symbol: &str, bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 6 + 128);
    s.push_str(&format!(
        "const unsigned char {symbol}{ARRAY_SUFFIX}[{}] __attribute__((aligned(4))) \
         __attribute__((visibility(\"hidden\")))=\n",
        bytes.len()
    ));
    s.push_str("{\n");

    for (line_no, line) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let values: Vec<String> = line.iter().map(|b| format!("0x{b:02X}")).collect();
        s.push('\t');
        s.push_str(&values.join(", "));
        s.push_str(",\n");
        if (line_no + 1) % LINES_PER_BLOCK == 0 {
            s.push('\n');
        }
    }

    s.push_str("};\n");
    s
}

/// Declarations matching [`c_source`], plus the length defines.
pub fn c_header(symbol: &str, decompressed_len: usize, compressed_len: usize) -> String {
    let rule = "//======================================================================";
    let mut s = String::with_capacity(1024);

    s.push_str(&format!("// {symbol}; Compressed with LZ77\n"));
    s.push_str("#pragma once\n\n");

    s.push_str(&format!(
        "{rule}\n\
         //\t{symbol}\n\
         //\t+ Compressed number of bytes   : {compressed_len}\n\
         //\t+ Decompressed number of bytes : {decompressed_len}\n\
         {rule}\n\n"
    ));

    push_brief(&mut s, &format!("The number of bytes {symbol} occupies."));
    s.push_str(&format!("#define {symbol}Len {decompressed_len}\n\n"));

    push_brief(
        &mut s,
        &format!("The number of bytes in the compression stream for {symbol}."),
    );
    s.push_str(&format!("#define {symbol}CompressedLen {compressed_len}\n\n"));

    push_brief(&mut s, &format!("The byte stream to decompress {symbol}."));
    s.push_str(&format!(
        "extern const unsigned char {symbol}{ARRAY_SUFFIX}[{compressed_len}];\n"
    ));
    s
}

fn push_brief(s: &mut String, text: &str) {
    s.push_str(&format!("/**\n * @brief {text}\n */\n"));
}
