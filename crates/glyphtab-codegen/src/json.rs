//! JSON listing for tooling that is neither C nor Rust

use crate::{cell_values, Emitter, Layout, OutputFormat, Result};
use glyphtab_core::{GlyphTable, GLYPH_HEIGHT};
use serde::Serialize;

/// Emits the table as one JSON document
pub struct JsonEmitter;

#[derive(Serialize)]
struct JsonTable<'a> {
    generator: String,
    source: &'a str,
    height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<usize>,
    glyphs: Vec<JsonGlyph>,
}

#[derive(Serialize)]
struct JsonGlyph {
    code: u8,
    /// -1 when undefined
    width: i64,
    /// Row-major, unpadded
    data: Vec<u8>,
}

impl Emitter for JsonEmitter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, table: &GlyphTable, layout: &Layout<'_>) -> Result<String> {
        let glyphs = table
            .entries()
            .map(|(code, glyph)| match glyph {
                Some(glyph) => JsonGlyph {
                    code,
                    width: glyph.width() as i64,
                    data: cell_values(glyph.cells(), None),
                },
                None => JsonGlyph {
                    code,
                    width: -1,
                    data: Vec::new(),
                },
            })
            .collect();

        let doc = JsonTable {
            generator: format!("glyphtab {}", glyphtab_core::VERSION),
            source: layout.source_name,
            height: GLYPH_HEIGHT,
            capacity: layout.capacity,
            glyphs,
        };

        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        Ok(out)
    }
}
