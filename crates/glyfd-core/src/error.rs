//! Error types for glyfd

use skrifa::raw::ReadError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlyfdError>;

/// Main error type for glyfd
///
/// Missing glyphs are not represented here: a character absent from the
/// font's character map is a per-character skip, reported through
/// [`Extraction::missing`](crate::Extraction::missing), not a failure.
#[derive(Debug, Error)]
pub enum GlyfdError {
    #[error("failed to read font file {}: {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font data in {}: {source}", path.display())]
    FontParse {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
