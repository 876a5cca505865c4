//! PNG export for rendered surfaces

use crate::io::error::{PatternError, Result};
use crate::render::raster::RasterSurface;

/// Save a rendered surface as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_surface_as_png(surface: &RasterSurface, output_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PatternError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    surface
        .image()
        .save(output_path)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
