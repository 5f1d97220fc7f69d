//! C header listing
//!
//! Records look like `{ 65, 3, { 1, 1, 1, ... } },`. Only the used cells
//! are written; C zero-fills the rest of `data[]`.

use crate::{cell_values, join_cells, Emitter, Layout, OutputFormat, Result};
use glyphtab_core::{Glyph, GlyphTable, GLYPH_HEIGHT, TABLE_SIZE};

/// Emits a `font_char FONT_DATA[256]` header
pub struct CHeaderEmitter;

impl CHeaderEmitter {
    fn record(code: u8, glyph: Option<&Glyph>) -> String {
        match glyph {
            Some(glyph) => format!(
                "    {{ {}, {}, {{ {} }} }},\n",
                code,
                glyph.width(),
                join_cells(&cell_values(glyph.cells(), None))
            ),
            None => format!("    {{ {}, -1, {{ }} }},\n", code),
        }
    }
}

impl Emitter for CHeaderEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::C
    }

    fn render(&self, table: &GlyphTable, layout: &Layout<'_>) -> Result<String> {
        let capacity = layout
            .capacity
            .or_else(|| self.format().default_capacity())
            .unwrap_or(GLYPH_HEIGHT);
        let max_width = capacity / GLYPH_HEIGHT;

        let mut out = String::new();
        out.push_str(&format!(
            "// generated by glyphtab {} from {}\n",
            glyphtab_core::VERSION,
            layout.source_name
        ));
        out.push_str("// DO NOT EDIT: changes are lost the next time the font sheet is converted.\n");
        out.push('\n');
        out.push_str("#ifndef GLYPHTAB_FONT_DATA_H\n");
        out.push_str("#define GLYPHTAB_FONT_DATA_H\n");
        out.push('\n');
        out.push_str(&format!(
            "// one glyph of a {}-pixel-high font, at most {} pixels wide.\n",
            GLYPH_HEIGHT, max_width
        ));
        out.push_str("typedef struct font_char {\n");
        out.push_str("    // character code of this entry\n");
        out.push_str("    unsigned char ch;\n");
        out.push('\n');
        out.push_str("    // glyph width in pixels, -1 when the character has no glyph\n");
        out.push_str("    int width;\n");
        out.push('\n');
        out.push_str(&format!(
            "    // row-major pixels, 1 = ink. rows are `width` cells long, so only the\n    // first {} * width cells are meaningful.\n",
            GLYPH_HEIGHT
        ));
        out.push_str(&format!("    int data[{}];\n", capacity));
        out.push_str("} font_char;\n");
        out.push('\n');
        out.push_str(&format!(
            "static const font_char FONT_DATA[{}] = {{\n",
            TABLE_SIZE
        ));

        for (code, glyph) in table.entries() {
            out.push_str(&Self::record(code, glyph));
        }

        out.push_str("};\n");
        out.push('\n');
        out.push_str("#endif\n");

        Ok(out)
    }
}
