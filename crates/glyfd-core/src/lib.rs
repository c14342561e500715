//! Glyfd Core: glyph outlines in, Dart glyph maps out
//!
//! This crate holds the pieces of the `extract_glyphs` tool: a character
//! set, a glyph source abstraction over a loaded font, an SVG path pen
//! that records outline drawing as a `d` string, the extraction pass that
//! ties them together, and the emitter for the generated Dart map file.
//!
//! ## Extracting paths
//!
//! ```rust,no_run
//! use glyfd_core::{dart, extract, CharacterSet, Font};
//!
//! # fn main() -> glyfd_core::Result<()> {
//! let font = Font::from_file("fonts/NotoSans-Regular.ttf")?;
//! let extraction = extract(&font.font_ref()?, &CharacterSet::uppercase_latin());
//! dart::write(dart::DEFAULT_OUTPUT_PATH, &extraction)?;
//! # Ok(())
//! # }
//! ```

pub mod charset;
pub mod dart;
pub mod error;
pub mod extract;
pub mod pen;
pub mod source;

pub use charset::CharacterSet;
pub use error::{GlyfdError, Result};
pub use extract::{extract, Extraction};
pub use pen::SvgPathPen;
pub use source::{Font, GlyphSource};
