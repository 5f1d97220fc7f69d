//! The 256-slot glyph table
//!
//! Slots are indexed by byte value. Lowercase letters never get slots of
//! their own: lookups fold them onto the uppercase entry, so both codes
//! always resolve to the same glyph data.

use crate::glyph::Glyph;

/// Number of slots, one per byte value
pub const TABLE_SIZE: usize = 256;

/// Character code used for the synthesized space glyph
pub const SPACE: u8 = b' ';

/// Fold a lowercase ASCII letter onto its uppercase code
pub fn normalize(code: u8) -> u8 {
    code.to_ascii_uppercase()
}

/// Glyph table indexed by character code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    slots: Vec<Option<Glyph>>,
}

impl GlyphTable {
    /// A table with every slot undefined
    pub fn new() -> Self {
        Self {
            slots: vec![None; TABLE_SIZE],
        }
    }

    /// Store a glyph under the normalized code, returning what was there
    pub fn insert(&mut self, code: u8, glyph: Glyph) -> Option<Glyph> {
        self.slots[normalize(code) as usize].replace(glyph)
    }

    /// Raw slot access, without case folding
    pub fn get(&self, code: u8) -> Option<&Glyph> {
        self.slots[code as usize].as_ref()
    }

    /// Resolve a code the way consumers see it: case-folded first
    pub fn lookup(&self, code: u8) -> Option<&Glyph> {
        self.get(normalize(code))
    }

    /// All 256 codes in ascending order with their resolved glyphs
    pub fn entries(&self) -> impl Iterator<Item = (u8, Option<&Glyph>)> + '_ {
        (0..=u8::MAX).map(move |code| (code, self.lookup(code)))
    }

    /// Number of codes that resolve to a glyph, aliases included
    pub fn defined_count(&self) -> usize {
        self.entries().filter(|(_, glyph)| glyph.is_some()).count()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}
