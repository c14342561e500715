// this_file: crates/glyfd-core/src/extract.rs

//! The extraction pass: one pen per resolved character.

use crate::charset::CharacterSet;
use crate::pen::SvgPathPen;
use crate::source::GlyphSource;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Result of one extraction run.
///
/// Path entries iterate in lexicographic character order regardless of
/// the order characters were resolved in. Characters the font could not
/// resolve are kept separately for diagnostics.
#[derive(Debug, Default)]
pub struct Extraction {
    paths: BTreeMap<char, String>,
    missing: Vec<char>,
}

impl Extraction {
    /// Entries in lexicographic character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.paths.iter().map(|(ch, d)| (*ch, d.as_str()))
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.paths.get(&ch).map(String::as_str)
    }

    /// Characters absent from the font's character map, in character-set
    /// order.
    pub fn missing(&self) -> &[char] {
        &self.missing
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Extract path `d` strings for every character the source can resolve.
///
/// One sequential pass over `charset` in its listed order. Characters
/// missing from the character map are skipped and recorded; a resolved
/// glyph with no outline still gets an entry with an empty string, the
/// way a space glyph comes out of fontTools.
pub fn extract<S: GlyphSource>(source: &S, charset: &CharacterSet) -> Extraction {
    let mut extraction = Extraction::default();
    for ch in charset.iter() {
        let Some(glyph) = source.resolve(ch) else {
            warn!("no glyph for {ch:?} in font");
            extraction.missing.push(ch);
            continue;
        };
        let mut pen = SvgPathPen::new();
        if source.draw(glyph, &mut pen).is_none() {
            debug!("glyph for {ch:?} has no outline");
        }
        extraction.paths.insert(ch, pen.finish());
    }
    extraction
}
