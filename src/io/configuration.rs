//! Pattern constants and runtime configuration defaults

/// Number of cells along each grid axis
pub const DEFAULT_SUBDIVISIONS: usize = 20;

/// Edge length of the output canvas in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 500;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed subdivisions per axis
pub const MAX_SUBDIVISIONS: usize = 1_000;

/// Maximum allowed canvas edge length in pixels
pub const MAX_CANVAS_SIZE: u32 = 16_384;

// Overlap applied to fills and strokes so neighbouring cells abut
// without anti-aliasing seams
/// Default seam correction in pixels
pub const SEAM_CORRECTION: f64 = 0.5;

/// Stroke width of stitch lines in pixels
pub const STITCH_WIDTH: f64 = 1.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Number of images generated per invocation
pub const DEFAULT_COUNT: usize = 1;

// Default palette
/// Cell color for `false` cells (crimson)
pub const DEFAULT_COLOR_A: &str = "#dc143c";
/// Cell color for `true` cells (cornflower blue)
pub const DEFAULT_COLOR_B: &str = "#6495ed";
/// Stitch line color
pub const DEFAULT_STITCH_COLOR: &str = "#000000";
/// Canvas background color
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// Progress bar display settings
/// Minimum batch size before a progress bar is shown
pub const MIN_BATCH_FOR_PROGRESS: usize = 2;
