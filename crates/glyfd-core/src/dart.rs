// this_file: crates/glyfd-core/src/dart.rs

//! Emission of the generated Dart glyph map.

use crate::error::{GlyfdError, Result};
use crate::extract::Extraction;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Where the generated file goes when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "lib/glyph_paths.dart";

const HEADER: &str = "// GENERATED FILE - glyph d strings (A-Z)\n\
                      // Run extract_glyphs to regenerate.\n\n";

/// Render the extraction as Dart source declaring
/// `const Map<String, String> glyphD`.
///
/// Entries appear in lexicographic character order. Path data goes into
/// raw triple-quoted strings so nothing in it is escape-processed. An
/// empty extraction still renders a valid declaration with an empty
/// table body.
pub fn render(extraction: &Extraction) -> String {
    let mut out = String::with_capacity(256 + extraction.len() * 512);
    out.push_str(HEADER);
    out.push_str("const Map<String, String> glyphD = {\n");
    for (ch, d) in extraction.iter() {
        let _ = writeln!(out, "  '{ch}': r'''{d}''',");
    }
    out.push_str("};\n");
    out
}

/// Render and write the generated file, overwriting any prior file at
/// `path`. The content is rendered fully before the file is touched.
pub fn write(path: impl AsRef<Path>, extraction: &Extraction) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render(extraction)).map_err(|source| GlyfdError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
