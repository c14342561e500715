//! The set of characters to extract.

use std::str::FromStr;
use thiserror::Error;

/// An ordered, duplicate-free sequence of characters.
///
/// Extraction walks the set in this order; the emitted table is sorted
/// separately, so the order here only affects diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Build a set from the given characters, dropping repeats while
    /// keeping first-seen order.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut out = Vec::new();
        for ch in chars {
            if !out.contains(&ch) {
                out.push(ch);
            }
        }
        Self { chars: out }
    }

    /// The 26 uppercase Latin letters `A`..=`Z`.
    pub fn uppercase_latin() -> Self {
        Self {
            chars: ('A'..='Z').collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for CharacterSet {
    fn default() -> Self {
        Self::uppercase_latin()
    }
}

/// Error returned when parsing an empty character set specification.
#[derive(Debug, Clone, Error)]
#[error("character set must contain at least one character")]
pub struct EmptyCharacterSet;

impl FromStr for CharacterSet {
    type Err = EmptyCharacterSet;

    /// Parse a literal run of characters, e.g. `"ABC012"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EmptyCharacterSet);
        }
        Ok(Self::new(s.chars()))
    }
}
