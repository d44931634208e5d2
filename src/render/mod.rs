// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Raster rendering for number patterns.
//!
//! Renderers draw [`crate::layout`] output onto an RGBA [`Canvas`] and encode the result as PNG.
//! Every canvas is owned by the call that created it, so nothing outlives a single render.

use std::fmt;

pub mod color;
mod font;
pub mod page;

pub use color::{ColorSource, RandomColors, SolidColor};
pub use page::{render_page, Grid, GridCell, RenderError, RenderedPage, GRID_COLUMNS};

/// An opaque 8-bit color.
pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];

const BYTES_PER_PIXEL: usize = 4;

/// A fixed-size, bounds-checked RGBA pixel grid.
///
/// Drawing primitives clip silently at the edges; only the explicit [`Canvas::get`] and
/// [`Canvas::set`] accessors report out-of-bounds coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Creates a new canvas filled with white.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, WHITE)
    }

    /// Creates a new opaque canvas filled with `fill`.
    pub fn new_filled(width: u32, height: u32, fill: Rgb) -> Result<Self, CanvasError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|area| area.checked_mul(BYTES_PER_PIXEL))
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        let mut pixels = vec![0u8; len];
        for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&[fill[0], fill[1], fill[2], u8::MAX]);
        }

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Returns the opaque color at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Sets the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.pixels[idx..idx + 3].copy_from_slice(&color);
        Ok(())
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Composites `color` over the pixel at `(x, y)` with the given opacity.
    fn blend(&mut self, x: i64, y: i64, color: Rgb, alpha: f64) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let alpha = alpha.clamp(0.0, 1.0);
        for (dst, src) in self.pixels[idx..idx + 3].iter_mut().zip(color) {
            let mixed = f64::from(src) * alpha + f64::from(*dst) * (1.0 - alpha);
            *dst = mixed.round() as u8;
        }
    }

    /// Fills the rectangle with top-left corner `(x, y)`.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgb) {
        for dy in 0..i64::from(h) {
            for dx in 0..i64::from(w) {
                self.blend(x + dx, y + dy, color, 1.0);
            }
        }
    }

    /// Fills a disc centered on `(cx, cy)` (pixel units, sub-pixel precision).
    ///
    /// A pixel is covered when its center lies inside the disc.
    pub fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        if radius <= 0.0 {
            return;
        }
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        let r2 = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    /// Writes `text` with the built-in bitmap font, each font pixel drawn as a `scale`² block.
    ///
    /// Characters without a glyph advance the cursor but draw nothing.
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb) {
        let scale = scale.max(1);
        let advance = i64::from(font::ADVANCE * scale);
        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = font::glyph(ch) else {
                continue;
            };
            let gx = x + i as i64 * advance;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (0x10 >> col) != 0 {
                        let px = gx + i64::from(col * scale);
                        let py = y + row as i64 * i64::from(scale);
                        self.fill_rect(px, py, scale, scale, color);
                    }
                }
            }
        }
    }

    /// Encodes the canvas as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(buf)
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, CanvasError> {
        if !self.in_bounds(i64::from(x), i64::from(y)) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Pixel width of `text` when drawn with [`Canvas::draw_text`] at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    let scale = scale.max(1);
    chars * font::ADVANCE * scale - (font::ADVANCE - font::GLYPH_WIDTH) * scale
}

/// Pixel height of one line of text at `scale`.
pub fn text_height(scale: u32) -> u32 {
    font::GLYPH_HEIGHT * scale.max(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: u32, height: u32 },
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
