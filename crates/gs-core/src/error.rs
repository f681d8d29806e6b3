use thiserror::Error;

/// Errors originating from the core module.
///
/// Every variant is a deterministic validation failure on input parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Requested output width or height is zero or above the size cap.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Source grid has a zero dimension or a buffer that does not match it.
    #[error("Image source invalide : {width}×{height}")]
    InvalidSource {
        /// Source width.
        width: u32,
        /// Source height.
        height: u32,
    },

    /// Glyph palette supplied with zero symbols.
    #[error("Palette de glyphes vide")]
    EmptyPalette,

    /// Gamma exponent is not a positive finite number.
    #[error("Correction gamma invalide : {0}")]
    InvalidGamma(f32),
}
