use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gs_core::frame::AsciiResult;

/// Fichier texte voisin de l'image : même nom, extension `.txt`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("txt")
}

/// Write the flattened result to `path` and return the byte count.
///
/// # Errors
/// Returns an error if `path` is the input image itself or the write fails.
pub fn write_result(path: &Path, input: &Path, result: &AsciiResult) -> Result<usize> {
    if path == input {
        anyhow::bail!("Output would overwrite the input image: {}", path.display());
    }
    let bytes = result.as_bytes();
    std::fs::write(path, bytes)
        .with_context(|| format!("Could not write output to file {}", path.display()))?;
    log::info!("{} octets écrits dans {}", bytes.len(), path.display());
    Ok(bytes.len())
}
