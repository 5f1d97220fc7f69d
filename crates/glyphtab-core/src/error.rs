//! Error types for glyphtab core

use std::path::PathBuf;
use thiserror::Error;

/// Result type for glyphtab core operations
pub type Result<T> = std::result::Result<T, GlyphError>;

/// Core error types
#[derive(Error, Debug)]
pub enum GlyphError {
    /// The source image could not be opened or decoded
    #[error("failed to read font sheet {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The source image has fewer rows than a glyph
    #[error("font sheet is {height} pixels high, glyphs need {required}")]
    SheetTooShort { height: u32, required: usize },

    /// The scan ran off the right edge while looking for a blank column
    #[error(
        "ran past the right edge of the font sheet (width {width}) while scanning \
         glyph {ch:?} starting at column {start}"
    )]
    SegmentationOverrun { ch: char, start: u32, width: u32 },

    /// Character set rejected
    #[error("invalid character set: {0}")]
    InvalidCharset(String),

    /// Space glyph width rejected
    #[error("space width must be at least 1, got {0}")]
    InvalidSpaceWidth(usize),
}
