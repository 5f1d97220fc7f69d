//! Font sheet loading and glyph segmentation
//!
//! A sheet is a single horizontal strip: glyphs sit left to right in
//! character set order, each followed by one fully blank column. Only the
//! top `GLYPH_HEIGHT` rows are read.

use crate::charset::Charset;
use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;
use crate::ink::InkRule;
use crate::GLYPH_HEIGHT;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// A decoded font sheet plus the rule that tells ink from background
#[derive(Debug, Clone)]
pub struct GlyphSheet {
    image: RgbaImage,
    ink: InkRule,
}

impl GlyphSheet {
    /// Decode a sheet from disk
    pub fn open<P: AsRef<Path>>(path: P, ink: InkRule) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| GlyphError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Self::from_image(&image, ink)
    }

    /// Wrap an already decoded image
    pub fn from_image(image: &DynamicImage, ink: InkRule) -> Result<Self> {
        Self::from_rgba(image.to_rgba8(), ink)
    }

    pub fn from_rgba(image: RgbaImage, ink: InkRule) -> Result<Self> {
        if (image.height() as usize) < GLYPH_HEIGHT {
            return Err(GlyphError::SheetTooShort {
                height: image.height(),
                required: GLYPH_HEIGHT,
            });
        }
        Ok(Self { image, ink })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Whether the pixel at (`x`, `y`) is ink. Caller keeps `x` in bounds.
    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.ink.is_ink(self.image.get_pixel(x, y))
    }

    /// Whether no glyph row has ink at column `x`
    pub fn is_blank_column(&self, x: u32) -> bool {
        (0..GLYPH_HEIGHT as u32).all(|y| !self.is_ink(x, y))
    }

    /// Find the blank column that closes the glyph starting at `start`
    ///
    /// The cursor moves before each test, so `start` itself is always
    /// part of the glyph and the result is at least `start + 1`.
    fn find_separator(&self, ch: char, start: u32) -> Result<u32> {
        let width = self.width();
        let overrun = || GlyphError::SegmentationOverrun { ch, start, width };

        let mut x = start;
        loop {
            x = x.checked_add(1).ok_or_else(overrun)?;
            if x >= width {
                return Err(overrun());
            }
            if self.is_blank_column(x) {
                return Ok(x);
            }
        }
    }

    /// Copy columns `[x1, x2)` out as a glyph
    fn extract(&self, x1: u32, x2: u32) -> Glyph {
        Glyph::from_fn((x2 - x1) as usize, |x, y| {
            self.is_ink(x1 + x as u32, y as u32)
        })
    }

    /// Split the sheet into one glyph per character, in charset order
    pub fn segment(&self, charset: &Charset) -> Result<Vec<(char, Glyph)>> {
        let (end, glyphs) = charset.chars().iter().try_fold(
            (0u32, Vec::with_capacity(charset.len())),
            |(x1, mut glyphs), &ch| {
                let x2 = self.find_separator(ch, x1)?;
                tracing::trace!("Glyph {:?}: columns {}..{}", ch, x1, x2);
                glyphs.push((ch, self.extract(x1, x2)));
                Ok::<_, GlyphError>((x2 + 1, glyphs))
            },
        )?;

        if end < self.width() {
            tracing::debug!(
                "{} trailing columns after the last glyph were ignored",
                self.width() - end
            );
        }

        Ok(glyphs)
    }
}
