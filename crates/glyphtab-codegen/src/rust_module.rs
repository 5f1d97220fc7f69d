//! Rust module listing
//!
//! Undefined characters become `None`. Defined ones carry a fixed-size
//! `data` array padded with zeros, so lowercase aliases render as lines
//! identical to their uppercase entries.

use crate::{cell_values, join_cells, Emitter, Layout, OutputFormat, Result};
use glyphtab_core::{Glyph, GlyphTable, GLYPH_HEIGHT, TABLE_SIZE};

/// Emits a `FONT_DATA: [Option<FontChar>; 256]` module
pub struct RustModuleEmitter;

impl RustModuleEmitter {
    fn record(glyph: Option<&Glyph>, capacity: usize) -> String {
        match glyph {
            Some(glyph) => format!(
                "    Some(FontChar {{ width: {}, data: [{}] }}),\n",
                glyph.width(),
                join_cells(&cell_values(glyph.cells(), Some(capacity)))
            ),
            None => "    None,\n".to_string(),
        }
    }
}

impl Emitter for RustModuleEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Rust
    }

    fn render(&self, table: &GlyphTable, layout: &Layout<'_>) -> Result<String> {
        let capacity = layout
            .capacity
            .or_else(|| self.format().default_capacity())
            .unwrap_or(GLYPH_HEIGHT);

        let mut out = String::new();
        out.push_str(&format!(
            "//! Glyph table generated by glyphtab {} from `{}`.\n",
            glyphtab_core::VERSION,
            layout.source_name
        ));
        out.push_str("//!\n");
        out.push_str("//! Do not edit by hand: convert the font sheet again instead.\n");
        out.push('\n');
        out.push_str("/// Rows in every glyph\n");
        out.push_str(&format!("pub const FONT_HEIGHT: usize = {};\n", GLYPH_HEIGHT));
        out.push('\n');
        out.push_str(&format!(
            "/// Cells reserved per glyph, enough for {} columns\n",
            capacity / GLYPH_HEIGHT
        ));
        out.push_str(&format!("pub const FONT_CAPACITY: usize = {};\n", capacity));
        out.push('\n');
        out.push_str("/// One glyph: `FONT_HEIGHT` rows of `width` cells, row-major in `data`, 1 = ink\n");
        out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n");
        out.push_str("pub struct FontChar {\n");
        out.push_str("    pub width: u32,\n");
        out.push_str("    pub data: [u8; FONT_CAPACITY],\n");
        out.push_str("}\n");
        out.push('\n');
        out.push_str("/// Glyphs indexed by character code, `None` where no glyph exists\n");
        out.push_str("#[rustfmt::skip]\n");
        out.push_str(&format!(
            "pub static FONT_DATA: [Option<FontChar>; {}] = [\n",
            TABLE_SIZE
        ));

        for (_, glyph) in table.entries() {
            out.push_str(&Self::record(glyph, capacity));
        }

        out.push_str("];\n");

        Ok(out)
    }
}
