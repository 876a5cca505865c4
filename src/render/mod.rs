//! Rendering of pattern maps onto a drawing surface
//!
//! This module contains rendering-related functionality including:
//! - The drawing surface seam and a recording test double
//! - A rasterizing surface backed by an RGBA pixel buffer
//! - Draw-call generation for colorings and stitch lines

/// Color representation and palette handling
pub mod palette;
/// Pixel-buffer surface implementation
pub mod raster;
/// Draw-call generation for pattern maps
pub mod renderer;
/// Drawing surface abstraction
pub mod surface;

pub use palette::Palette;
pub use raster::RasterSurface;
pub use renderer::Renderer;
pub use surface::Surface;
