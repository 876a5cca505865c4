//! Draw-call generation for a colored grid and its stitch lines
//!
//! Geometry convention: cell `(row, col)` occupies the square at
//! `(col * cell_size, row * cell_size)`. A bottom edge is stroked along the
//! boundary below its cell, a right edge along the boundary to its right.
//! Fills and strokes are widened by the seam correction so adjacent shapes
//! abut without anti-aliasing gaps.

use crate::algorithm::coloring::ColorMap;
use crate::algorithm::edges::EdgeMap;
use crate::render::palette::Palette;
use crate::render::surface::{Rect, StrokeStyle, Surface};

/// Geometry and stroke parameters for one render
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Edge length of a single cell in surface units
    pub cell_size: f64,
    /// Seam correction added to fills and stroke ends
    pub seam: f64,
    /// Stroke settings for stitch segments
    pub stroke: StrokeStyle,
}

/// Issues fill and stroke calls for a pattern against a surface
///
/// Stateless beyond its options; rendering is a pure walk over the maps.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The renderer's geometry and stroke parameters
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Draw the cell coloring and the stitch lines
    ///
    /// Issues exactly one fill per cell and one stroke per set edge flag.
    /// Never fails: out-of-bounds geometry is the surface's concern and the
    /// maps agree on dimensions by construction.
    pub fn render(
        &self,
        colors: &ColorMap,
        edges: &EdgeMap,
        palette: &Palette,
        surface: &mut dyn Surface,
    ) {
        self.fill_cells(colors, palette, surface);
        self.stroke_stitches(edges, surface);
    }

    /// One filled square per cell, palette-indexed by the cell color
    fn fill_cells(&self, colors: &ColorMap, palette: &Palette, surface: &mut dyn Surface) {
        let length = self.options.cell_size;
        let side = length + self.options.seam;
        let n = colors.subdivisions();

        for row in 0..n {
            for col in 0..n {
                let rect = Rect::new(col as f64 * length, row as f64 * length, side, side);
                surface.fill_rect(rect, palette.color_for(colors.color(row, col)));
            }
        }
    }

    /// One stroked segment per set edge flag
    ///
    /// Bottom edges run horizontally along the boundary below their cell,
    /// right edges vertically along the boundary to the right. Segment ends
    /// overshoot by one seam each so consecutive stitches meet cleanly.
    fn stroke_stitches(&self, edges: &EdgeMap, surface: &mut dyn Surface) {
        let length = self.options.cell_size;
        let seam = self.options.seam;
        let span = 2.0f64.mul_add(seam, length);
        let n = edges.subdivisions();

        for row in 0..n {
            for col in 0..n {
                let x = col as f64 * length;
                let y = row as f64 * length;

                if edges.has_bottom_edge(row, col) {
                    let boundary = y + length + seam;
                    surface.stroke_segment(
                        [x, boundary],
                        [x + span, boundary],
                        &self.options.stroke,
                    );
                }

                if edges.has_right_edge(row, col) {
                    let boundary = x + length + seam;
                    surface.stroke_segment(
                        [boundary, y],
                        [boundary, y + span],
                        &self.options.stroke,
                    );
                }
            }
        }
    }
}
