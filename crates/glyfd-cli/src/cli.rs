//! CLI argument definitions using Clap v4

use clap::Parser;
use glyfd_core::{dart, CharacterSet};
use std::path::PathBuf;

/// Extract SVG path d strings for a character set from a font file and
/// emit a generated Dart map
#[derive(Parser, Debug)]
#[command(name = "extract_glyphs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Font file path (.ttf, .otf)
    pub font: PathBuf,

    /// Output file for the generated Dart map
    #[arg(short = 'o', long = "output", default_value = dart::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Characters to extract, as a literal run
    #[arg(
        short = 'c',
        long = "chars",
        default_value = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
    )]
    pub chars: CharacterSet,
}
