//! # glyphtab codegen
//!
//! Serializes a [`GlyphTable`] into a source listing: exactly one record
//! per character code, in ascending order, wrapped in a fixed template
//! that marks the file as generated.
//!
//! Supported targets:
//! - **c**: a C header with a `font_char FONT_DATA[256]` array
//! - **rust**: a Rust module with `FONT_DATA: [Option<FontChar>; 256]`
//! - **json**: a machine-readable dump for other tooling

pub mod c_header;
pub mod json;
pub mod rust_module;

pub use c_header::CHeaderEmitter;
pub use json::JsonEmitter;
pub use rust_module::RustModuleEmitter;

use glyphtab_core::{GlyphTable, GLYPH_HEIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Result type for listing generation
pub type Result<T> = std::result::Result<T, EmitError>;

/// Listing generation errors
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("per-glyph capacity must be a positive multiple of {height} cells, got {capacity}")]
    InvalidCapacity { capacity: usize, height: usize },

    #[error(
        "glyph for code {code} is {width} pixels wide, but {format} entries hold at most {max_width}"
    )]
    GlyphTooWide {
        code: u8,
        width: usize,
        max_width: usize,
        format: OutputFormat,
    },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Target language of the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C header
    #[default]
    C,
    /// Rust module
    Rust,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Cells reserved per entry when none is configured
    pub fn default_capacity(&self) -> Option<usize> {
        match self {
            OutputFormat::C => Some(GLYPH_HEIGHT * 5),
            OutputFormat::Rust => Some(GLYPH_HEIGHT * 12),
            OutputFormat::Json => None,
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::C, OutputFormat::Rust, OutputFormat::Json]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::C => "c",
            OutputFormat::Rust => "rust",
            OutputFormat::Json => "json",
        }
    }

    fn emitter(&self) -> Box<dyn Emitter> {
        match self {
            OutputFormat::C => Box::new(CHeaderEmitter),
            OutputFormat::Rust => Box::new(RustModuleEmitter),
            OutputFormat::Json => Box::new(JsonEmitter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "h" => Ok(OutputFormat::C),
            "rust" | "rs" => Ok(OutputFormat::Rust),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected c, rust or json)")),
        }
    }
}

/// How a listing is produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmitOptions {
    pub format: OutputFormat,
    /// Cells per entry; `None` uses the format default
    pub capacity: Option<usize>,
    /// Name of the sheet the table came from, quoted in the header
    pub source_name: String,
}

/// Everything an emitter needs besides the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout<'a> {
    /// Validated cells per entry, if the target has fixed-size storage
    pub capacity: Option<usize>,
    pub source_name: &'a str,
}

/// A listing target
pub trait Emitter {
    fn format(&self) -> OutputFormat;

    /// Render the complete listing. The table has already been checked
    /// against `layout.capacity`.
    fn render(&self, table: &GlyphTable, layout: &Layout<'_>) -> Result<String>;
}

/// Resolve and validate the per-entry capacity for a table
pub fn resolve_capacity(
    table: &GlyphTable,
    format: OutputFormat,
    capacity: Option<usize>,
) -> Result<Option<usize>> {
    let Some(capacity) = capacity.or_else(|| format.default_capacity()) else {
        return Ok(None);
    };

    if capacity == 0 || capacity % GLYPH_HEIGHT != 0 {
        return Err(EmitError::InvalidCapacity {
            capacity,
            height: GLYPH_HEIGHT,
        });
    }

    for (code, glyph) in table.entries() {
        if let Some(glyph) = glyph {
            if glyph.cell_count() > capacity {
                return Err(EmitError::GlyphTooWide {
                    code,
                    width: glyph.width(),
                    max_width: capacity / GLYPH_HEIGHT,
                    format,
                });
            }
        }
    }

    Ok(Some(capacity))
}

/// Produce the complete listing for a table
pub fn emit(table: &GlyphTable, options: &EmitOptions) -> Result<String> {
    let capacity = resolve_capacity(table, options.format, options.capacity)?;
    let layout = Layout {
        capacity,
        source_name: &options.source_name,
    };

    let emitter = options.format.emitter();
    tracing::debug!(
        "Emitting {} listing (capacity {:?})",
        emitter.format(),
        layout.capacity
    );
    emitter.render(table, &layout)
}

/// Row-major cells as `0`/`1`, right-padded with `0` to `len` if given
pub(crate) fn cell_values(cells: &[bool], len: Option<usize>) -> Vec<u8> {
    let mut values: Vec<u8> = cells.iter().map(|&c| u8::from(c)).collect();
    if let Some(len) = len {
        values.resize(len.max(values.len()), 0);
    }
    values
}

/// Comma-separated cell list
pub(crate) fn join_cells(values: &[u8]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
