//! Sheet to table: the whole generation pass

use crate::charset::{Charset, DEFAULT_SPACE_WIDTH};
use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;
use crate::ink::InkRule;
use crate::sheet::GlyphSheet;
use crate::table::{GlyphTable, SPACE};
use std::path::Path;

/// Inputs that shape a generated table besides the sheet itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Sheet order of the glyphs
    pub charset: Charset,
    /// Width of the synthesized all-blank space glyph
    pub space_width: usize,
    /// Ink predicate used when reading the sheet
    pub ink: InkRule,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            charset: Charset::default(),
            space_width: DEFAULT_SPACE_WIDTH,
            ink: InkRule::default(),
        }
    }
}

/// Build the glyph table for a decoded sheet
pub fn build_table(sheet: &GlyphSheet, options: &GeneratorOptions) -> Result<GlyphTable> {
    if options.space_width == 0 {
        return Err(GlyphError::InvalidSpaceWidth(options.space_width));
    }

    let mut table = GlyphTable::new();
    table.insert(SPACE, Glyph::blank(options.space_width));

    for (ch, glyph) in sheet.segment(&options.charset)? {
        // Charset guarantees a byte-sized code
        table.insert(ch as u32 as u8, glyph);
    }

    tracing::debug!(
        "Built glyph table: {} sheet glyphs, {} codes defined",
        options.charset.len(),
        table.defined_count()
    );

    Ok(table)
}

/// Open the sheet at `path` and build its table
pub fn generate<P: AsRef<Path>>(path: P, options: &GeneratorOptions) -> Result<GlyphTable> {
    let sheet = GlyphSheet::open(path, options.ink)?;
    build_table(&sheet, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::tests::{block_sheet, PAPER};
    use crate::table::TABLE_SIZE;
    use crate::GLYPH_HEIGHT;
    use image::RgbaImage;
    use pretty_assertions::assert_eq;

    fn options(charset: &str) -> GeneratorOptions {
        GeneratorOptions {
            charset: Charset::new(charset).unwrap(),
            ..Default::default()
        }
    }

    fn table_for(image: RgbaImage, options: &GeneratorOptions) -> GlyphTable {
        let sheet = GlyphSheet::from_rgba(image, options.ink).unwrap();
        build_table(&sheet, options).unwrap()
    }

    #[test]
    fn test_two_glyph_table() {
        let table = table_for(block_sheet(&[3, 5]), &options("AB"));

        let a = table.lookup(b'A').unwrap();
        assert_eq!(a.width(), 3);
        assert!(a.cells().iter().all(|&c| c));
        let b = table.lookup(b'B').unwrap();
        assert_eq!(b.width(), 5);
        assert!(b.cells().iter().all(|&c| c));

        for (code, glyph) in table.entries() {
            match code {
                b'A' | b'B' | b'a' | b'b' | SPACE => assert!(glyph.is_some(), "code {code}"),
                _ => assert!(glyph.is_none(), "code {code}"),
            }
        }
        assert_eq!(table.defined_count(), 5);
    }

    #[test]
    fn test_space_ignores_sheet_content() {
        // Sheet column zero is solid ink, the space glyph still comes out blank
        let mut opts = options("#");
        opts.space_width = 4;
        let table = table_for(block_sheet(&[5]), &opts);

        let space = table.lookup(SPACE).unwrap();
        assert_eq!(space.width(), 4);
        assert_eq!(space.height(), GLYPH_HEIGHT);
        assert!(space.is_blank());
    }

    #[test]
    fn test_lowercase_charset_entry_stored_uppercase() {
        let table = table_for(block_sheet(&[2]), &options("k"));
        assert!(table.get(b'K').is_some());
        assert!(table.get(b'k').is_none());
        assert_eq!(table.lookup(b'k'), table.lookup(b'K'));
    }

    #[test]
    fn test_every_letter_aliases() {
        let widths: Vec<u32> = (1..=26).map(|i| i % 5 + 1).collect();
        let table = table_for(block_sheet(&widths), &options("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));

        for lower in b'a'..=b'z' {
            let upper = lower.to_ascii_uppercase();
            assert_eq!(table.lookup(lower), table.lookup(upper));
            assert!(table.lookup(lower).is_some());
        }
    }

    #[test]
    fn test_zero_space_width_rejected() {
        let mut opts = options("A");
        opts.space_width = 0;
        let sheet = GlyphSheet::from_rgba(block_sheet(&[1]), opts.ink).unwrap();
        assert!(matches!(
            build_table(&sheet, &opts),
            Err(GlyphError::InvalidSpaceWidth(0))
        ));
    }

    #[test]
    fn test_empty_charset_only_defines_space() {
        let image = RgbaImage::from_pixel(1, GLYPH_HEIGHT as u32, PAPER);
        let table = table_for(image, &options(""));
        assert_eq!(table.defined_count(), 1);
        assert_eq!(table.entries().count(), TABLE_SIZE);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut image = block_sheet(&[3, 1, 4]);
        image.put_pixel(1, 1, PAPER);
        image.put_pixel(7, 2, PAPER);
        let opts = options("XY-");

        assert_eq!(table_for(image.clone(), &opts), table_for(image, &opts));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.png");
        block_sheet(&[2, 2]).save(&path).unwrap();

        let table = generate(&path, &options("01")).unwrap();
        assert_eq!(table.lookup(b'0').map(Glyph::width), Some(2));
        assert_eq!(table.lookup(b'1').map(Glyph::width), Some(2));
    }
}
