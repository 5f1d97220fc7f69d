//! Character set: which characters the sheet holds, left to right

use crate::error::{GlyphError, Result};
use crate::table::{normalize, TABLE_SIZE};

/// Characters of the stock 5-pixel font, in sheet order
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,()[]{}<>/\\|!-_+=;:?'\"%#~";

/// Width of the synthesized space glyph in the stock font
pub const DEFAULT_SPACE_WIDTH: usize = 2;

/// A validated, ordered character set
///
/// Every character fits a byte-indexed table, is not the space character
/// and does not collide with another entry once uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    pub fn new(chars: &str) -> Result<Self> {
        let mut seen = [None::<char>; TABLE_SIZE];

        for ch in chars.chars() {
            let code = u32::from(ch);
            if code as usize >= TABLE_SIZE {
                return Err(GlyphError::InvalidCharset(format!(
                    "{ch:?} (U+{code:04X}) does not fit a {TABLE_SIZE}-entry table"
                )));
            }
            if ch == ' ' {
                return Err(GlyphError::InvalidCharset(
                    "the space glyph is synthesized and cannot come from the sheet".to_string(),
                ));
            }

            let slot = normalize(code as u8) as usize;
            if let Some(previous) = seen[slot] {
                return Err(GlyphError::InvalidCharset(format!(
                    "{ch:?} and {previous:?} share table entry {slot}"
                )));
            }
            seen[slot] = Some(ch);
        }

        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CHARSET.chars().collect(),
        }
    }
}
