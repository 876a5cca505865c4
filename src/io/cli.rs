//! Command-line interface for generating stitch-pattern PNG images

use crate::algorithm::controller::{PatternConfig, PatternController};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS_SIZE, DEFAULT_COLOR_A, DEFAULT_COLOR_B, DEFAULT_COUNT,
    DEFAULT_SEED, DEFAULT_STITCH_COLOR, DEFAULT_SUBDIVISIONS, MAX_CANVAS_SIZE, SEAM_CORRECTION,
    STITCH_WIDTH,
};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::image::export_surface_as_png;
use crate::io::progress::ProgressManager;
use crate::render::palette::{Palette, Rgba, parse_hex_color};
use crate::render::raster::RasterSurface;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hitomezashi")]
#[command(
    author,
    version,
    about = "Generate hitomezashi stitch patterns as PNG images"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output PNG file; with --count above 1, numbered siblings are derived
    /// from its stem
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of cells along each grid axis
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUBDIVISIONS)]
    pub subdivisions: usize,

    /// Canvas edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub size: u32,

    /// Number of patterns to generate, advancing the seed by one per image
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Hex color for cells colored false
    #[arg(short = 'a', long, default_value = DEFAULT_COLOR_A)]
    pub color_a: String,

    /// Hex color for cells colored true
    #[arg(short = 'b', long, default_value = DEFAULT_COLOR_B)]
    pub color_b: String,

    /// Hex color for stitch lines
    #[arg(long, default_value = DEFAULT_STITCH_COLOR)]
    pub stitch_color: String,

    /// Hex color for the canvas background
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Seam correction in pixels applied to fills and stroke ends
    #[arg(long, default_value_t = SEAM_CORRECTION)]
    pub seam: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate images even if output files exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch generation of pattern images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export images according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, color parsing, rendering or
    /// export fails.
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        let palette = Palette::from_hex(&self.cli.color_a, &self.cli.color_b)?;
        let stitch_color = parse_hex_color(&self.cli.stitch_color)?;
        let background = parse_hex_color(&self.cli.background)?;

        let outputs = self.collect_outputs()?;

        if outputs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(outputs.len());
        }

        for (path, seed) in &outputs {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_image(path);
            }

            self.render_image(path, *seed, palette, stitch_color, background)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_image();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.size == 0 {
            return Err(invalid_parameter("size", &self.cli.size, &"must be at least 1"));
        }
        if self.cli.size > MAX_CANVAS_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &format!("exceeds maximum of {MAX_CANVAS_SIZE}"),
            ));
        }
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must be at least 1",
            ));
        }
        if !self.cli.seam.is_finite() || self.cli.seam < 0.0 {
            return Err(invalid_parameter(
                "seam",
                &self.cli.seam,
                &"must be finite and non-negative",
            ));
        }
        Ok(())
    }

    fn collect_outputs(&self) -> Result<Vec<(PathBuf, u64)>> {
        if self.cli.output.extension().and_then(|s| s.to_str()) != Some("png") {
            return Err(io_error("Output must be a PNG path"));
        }

        // Seeds are tied to the image index, not the surviving list position,
        // so skipped outputs leave the rest reproducible.
        let mut outputs = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let path = if self.cli.count == 1 {
                self.cli.output.clone()
            } else {
                Self::numbered_output_path(&self.cli.output, index + 1)
            };

            if self.should_write_file(&path) {
                outputs.push((path, self.cli.seed.wrapping_add(index as u64)));
            }
        }

        Ok(outputs)
    }

    fn should_write_file(&self, output_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path.exists() {
            // Allow print for user feedback for skipped outputs
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", output_path.display());
            }
            false
        } else {
            true
        }
    }

    fn render_image(
        &self,
        output_path: &Path,
        seed: u64,
        palette: Palette,
        stitch_color: Rgba,
        background: Rgba,
    ) -> Result<()> {
        let surface = RasterSurface::new(self.cli.size, self.cli.size, background);
        let config = PatternConfig {
            subdivisions: self.cli.subdivisions,
            seam: self.cli.seam,
            stitch_width: STITCH_WIDTH,
            stitch_color,
        };

        let controller = PatternController::new(surface, config, palette, seed)?;

        export_surface_as_png(
            controller.surface(),
            output_path
                .to_str()
                .ok_or_else(|| io_error("Invalid output path"))?,
        )
    }

    /// Derive the path for image `index` in a batch from the requested output
    pub fn numbered_output_path(output: &Path, index: usize) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let extension = output.extension().unwrap_or_default();
        let name = format!(
            "{}_{index}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );

        if let Some(parent) = output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
