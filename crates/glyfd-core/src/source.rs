// this_file: crates/glyfd-core/src/source.rs

//! Font loading and the glyph source abstraction.

use crate::error::{GlyfdError, Result};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use std::fs;
use std::path::{Path, PathBuf};

/// Types that can resolve characters to glyphs and draw those glyphs
/// into an [`OutlinePen`].
///
/// This is the seam between the extraction pass and the font library:
/// production code goes through [`skrifa::FontRef`], tests substitute a
/// scripted source.
pub trait GlyphSource {
    /// Look the character up in the font's best character map.
    fn resolve(&self, ch: char) -> Option<GlyphId>;

    /// Have the glyph draw itself into `pen`.
    ///
    /// Returns `None` when the glyph has no outline to draw; the pen is
    /// left untouched in that case.
    fn draw<P: OutlinePen>(&self, glyph: GlyphId, pen: &mut P) -> Option<()>;
}

impl GlyphSource for FontRef<'_> {
    fn resolve(&self, ch: char) -> Option<GlyphId> {
        self.charmap().map(ch)
    }

    fn draw<P: OutlinePen>(&self, glyph: GlyphId, pen: &mut P) -> Option<()> {
        let outlines = self.outline_glyphs();
        // Unscaled keeps coordinates in font design units.
        let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
        outlines.get(glyph)?.draw(settings, pen).ok()?;
        Some(())
    }
}

/// A font brought into memory from disk.
///
/// Owns the raw bytes and hands out parse-on-demand [`FontRef`]s. The
/// data is validated once at load time so a bad file fails before any
/// output is written.
#[derive(Debug)]
pub struct Font {
    path: PathBuf,
    data: Vec<u8>,
}

impl Font {
    /// Read and validate a font file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = fs::read(&path).map_err(|source| GlyfdError::FontRead {
            path: path.clone(),
            source,
        })?;
        FontRef::new(&data).map_err(|source| GlyfdError::FontParse {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, data })
    }

    /// Create a `FontRef` over the loaded data.
    pub fn font_ref(&self) -> Result<FontRef<'_>> {
        FontRef::new(&self.data).map_err(|source| GlyfdError::FontParse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
