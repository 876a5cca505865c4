//! Pattern state ownership and render orchestration
//!
//! The controller owns the current pair of stitch patterns, the palette and
//! the surface, and replaces pattern state atomically between renders. Each
//! operation triggers one full synchronous recompute-and-redraw; there is no
//! partial update path.

use crate::algorithm::coloring::ColorMap;
use crate::algorithm::edges::EdgeMap;
use crate::algorithm::pattern::{BitSource, RandomBitSource, StitchPattern};
use crate::io::configuration::{
    DEFAULT_SUBDIVISIONS, MAX_SUBDIVISIONS, SEAM_CORRECTION, STITCH_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::render::palette::{Palette, Rgba};
use crate::render::renderer::{RenderOptions, Renderer};
use crate::render::surface::{Rect, StrokeStyle, Surface};

/// Parameters controlling grid resolution and stitch geometry
#[derive(Debug, Clone, Copy)]
pub struct PatternConfig {
    /// Number of cells along each grid axis
    pub subdivisions: usize,
    /// Seam correction in surface units
    pub seam: f64,
    /// Stitch stroke width in surface units
    pub stitch_width: f64,
    /// Stitch stroke color
    pub stitch_color: Rgba,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
            seam: SEAM_CORRECTION,
            stitch_width: STITCH_WIDTH,
            stitch_color: [0, 0, 0, 255],
        }
    }
}

/// Owns current pattern state and redraws it against a surface
///
/// Replaces the ambient globals of a browser toy: the two stitch patterns
/// and the palette live here exclusively, and every mutation goes through an
/// operation that leaves a freshly drawn surface behind.
pub struct PatternController<S: Surface> {
    surface: S,
    bits: Box<dyn BitSource>,
    config: PatternConfig,
    palette: Palette,
    renderer: Renderer,
    horizontal: StitchPattern,
    vertical: StitchPattern,
}

impl<S: Surface> PatternController<S> {
    /// Create a controller with a seeded random bit source and draw the
    /// initial pattern
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `config.subdivisions` is zero or
    /// exceeds the allocation guard.
    pub fn new(surface: S, config: PatternConfig, palette: Palette, seed: u64) -> Result<Self> {
        Self::with_bit_source(surface, config, palette, Box::new(RandomBitSource::new(seed)))
    }

    /// Create a controller drawing bits from an injected source
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `config.subdivisions` is zero or
    /// exceeds the allocation guard.
    pub fn with_bit_source(
        surface: S,
        config: PatternConfig,
        palette: Palette,
        mut bits: Box<dyn BitSource>,
    ) -> Result<Self> {
        if config.subdivisions == 0 {
            return Err(invalid_parameter(
                "subdivisions",
                &config.subdivisions,
                &"must be at least 1",
            ));
        }
        if config.subdivisions > MAX_SUBDIVISIONS {
            return Err(invalid_parameter(
                "subdivisions",
                &config.subdivisions,
                &format!("exceeds maximum of {MAX_SUBDIVISIONS}"),
            ));
        }

        let cell_size =
            f64::from(surface.width().min(surface.height())) / config.subdivisions as f64;
        let renderer = Renderer::new(RenderOptions {
            cell_size,
            seam: config.seam,
            stroke: StrokeStyle {
                color: config.stitch_color,
                width: config.stitch_width,
            },
        });

        let horizontal = StitchPattern::generate(config.subdivisions, bits.as_mut());
        let vertical = StitchPattern::generate(config.subdivisions, bits.as_mut());

        let mut controller = Self {
            surface,
            bits,
            config,
            palette,
            renderer,
            horizontal,
            vertical,
        };
        controller.redraw()?;
        Ok(controller)
    }

    /// Replace both stitch patterns with fresh random ones and redraw
    ///
    /// # Errors
    ///
    /// Propagates redraw failures.
    pub fn regenerate(&mut self) -> Result<()> {
        self.horizontal = StitchPattern::generate(self.config.subdivisions, self.bits.as_mut());
        self.vertical = StitchPattern::generate(self.config.subdivisions, self.bits.as_mut());
        self.redraw()
    }

    /// Swap the palette and redraw the existing patterns
    ///
    /// # Errors
    ///
    /// Propagates redraw failures.
    pub fn set_palette(&mut self, palette: Palette) -> Result<()> {
        self.palette = palette;
        self.redraw()
    }

    /// Recompute the derived maps and redraw the whole surface
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the owned patterns disagree in length;
    /// the constructors make that unreachable, but the edge map derivation
    /// validates it regardless.
    pub fn redraw(&mut self) -> Result<()> {
        let edges = EdgeMap::build(&self.horizontal, &self.vertical)?;
        let colors = ColorMap::build(&edges);

        self.surface.clear(Rect::new(
            0.0,
            0.0,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        ));
        self.renderer
            .render(&colors, &edges, &self.palette, &mut self.surface);
        Ok(())
    }

    /// The current horizontal stitch pattern
    pub const fn horizontal(&self) -> &StitchPattern {
        &self.horizontal
    }

    /// The current vertical stitch pattern
    pub const fn vertical(&self) -> &StitchPattern {
        &self.vertical
    }

    /// The current palette
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of cells along each grid axis
    pub const fn subdivisions(&self) -> usize {
        self.config.subdivisions
    }

    /// The drawn surface
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the controller and take the drawn surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}
