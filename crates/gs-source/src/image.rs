use std::path::Path;

use anyhow::{Context, Result};
use gs_core::frame::PixelGrid;

/// Décode une image depuis le disque en grille RGBA.
///
/// Format is guessed from the file content and extension (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use gs_source::image::load_image;
/// use std::path::Path;
/// let grid = load_image(Path::new("photo.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)
        .with_context(|| format!("Could not find or open file: {}", path.display()))?;
    into_grid(img)
}

fn into_grid(img: image::DynamicImage) -> Result<PixelGrid> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Image décodée : {width}×{height}");
    Ok(PixelGrid::from_rgba(width, height, rgba.into_raw())?)
}
