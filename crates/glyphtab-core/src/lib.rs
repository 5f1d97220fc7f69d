//! # glyphtab core
//!
//! Reads a bitmap font strip and turns it into a byte-indexed glyph table.
//!
//! This crate provides:
//! - Ink/background classification of sheet pixels
//! - Glyph segmentation on blank-column separators
//! - The 256-slot glyph table with lowercase-to-uppercase folding
//!
//! ```text
//!   #.#.###.#..
//!   #.#..#..#..   one blank column
//!   ###..#..#..   between glyphs
//!   #.#..#.....
//!   #.#.###.#..
//! ```

pub mod charset;
pub mod error;
pub mod generator;
pub mod glyph;
pub mod ink;
pub mod sheet;
pub mod table;

pub use charset::{Charset, DEFAULT_CHARSET, DEFAULT_SPACE_WIDTH};
pub use error::{GlyphError, Result};
pub use generator::{build_table, generate, GeneratorOptions};
pub use glyph::Glyph;
pub use ink::{Channel, InkRule, InkTest};
pub use sheet::GlyphSheet;
pub use table::{normalize, GlyphTable, SPACE, TABLE_SIZE};

/// Rows in every glyph
pub const GLYPH_HEIGHT: usize = 5;

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
