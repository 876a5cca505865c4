//! Pixel-buffer surface backed by an RGBA image

use image::{Rgba, RgbaImage};

use crate::render::palette;
use crate::render::surface::{Rect, StrokeStyle, Surface};

/// Rasterizing surface that draws into an in-memory RGBA image
///
/// Fills and strokes are clamped to the pixel buffer, so no draw call can
/// fail for any well-formed input.
pub struct RasterSurface {
    pixels: RgbaImage,
    background: palette::Rgba,
}

impl RasterSurface {
    /// Create a surface of the given size filled with the background color
    pub fn new(width: u32, height: u32, background: palette::Rgba) -> Self {
        let pixels = RgbaImage::from_pixel(width, height, Rgba(background));
        Self { pixels, background }
    }

    /// The rendered pixel buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Fill the pixel block covered by a clamped rectangle
    fn fill_span(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: palette::Rgba) {
        let width = self.pixels.width();
        let height = self.pixels.height();

        let col_start = x0.floor().max(0.0) as u32;
        let col_end = (x1.ceil().max(0.0) as u32).min(width);
        let row_start = y0.floor().max(0.0) as u32;
        let row_end = (y1.ceil().max(0.0) as u32).min(height);

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.pixels.put_pixel(col, row, Rgba(color));
            }
        }
    }

    /// Stamp a square of `half` half-width centred on a point
    fn stamp(&mut self, x: f64, y: f64, half: f64, color: palette::Rgba) {
        self.fill_span(x - half, y - half, x + half, y + half, color);
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn clear(&mut self, region: Rect) {
        let background = self.background;
        self.fill_span(
            region.x,
            region.y,
            region.x + region.width,
            region.y + region.height,
            background,
        );
    }

    fn fill_rect(&mut self, rect: Rect, color: palette::Rgba) {
        self.fill_span(
            rect.x,
            rect.y,
            rect.x + rect.width,
            rect.y + rect.height,
            color,
        );
    }

    fn stroke_segment(&mut self, from: [f64; 2], to: [f64; 2], style: &StrokeStyle) {
        let dx = to[0] - from[0];
        let dy = to[1] - from[1];
        let length = dx.hypot(dy);
        let half = (style.width / 2.0).max(0.5);

        // Unit-spaced samples along the segment, stamping a square at each,
        // cover any orientation; the stitch segments are all axis-aligned.
        let steps = length.ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.stamp(
                dx.mul_add(t, from[0]),
                dy.mul_add(t, from[1]),
                half,
                style.color,
            );
        }
    }
}
