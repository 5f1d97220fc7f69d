//! Glyph pixel grids

use crate::GLYPH_HEIGHT;

/// Pixel data for one character: `GLYPH_HEIGHT` rows of `width` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: usize,
    /// Row-major, `GLYPH_HEIGHT * width` cells
    cells: Vec<bool>,
}

impl Glyph {
    /// An all-blank glyph
    pub fn blank(width: usize) -> Self {
        debug_assert!(width > 0);
        Self {
            width,
            cells: vec![false; GLYPH_HEIGHT * width],
        }
    }

    /// Build a glyph from a row-major cell vector
    ///
    /// Returns `None` when `width` is zero or the cell count is not
    /// `GLYPH_HEIGHT * width`.
    pub fn from_cells(width: usize, cells: Vec<bool>) -> Option<Self> {
        (width > 0 && cells.len() == GLYPH_HEIGHT * width).then_some(Self { width, cells })
    }

    /// Build a glyph column by column from an ink lookup
    pub(crate) fn from_fn(width: usize, mut ink: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..GLYPH_HEIGHT)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| ink(x, y))
            .collect();
        Self { width, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Cell at column `x`, row `y`
    pub fn cell(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.width && y < GLYPH_HEIGHT {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// All cells flattened row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| !c)
    }

    /// Number of storage cells this glyph occupies
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
