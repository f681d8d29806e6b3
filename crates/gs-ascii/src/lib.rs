//! Glyph mapping engine for goscii.
//!
//! Converts pixel grids to ASCII glyph grids by luminance.

pub mod luminance;
pub mod mapper;

pub use mapper::{GlyphMapper, generate, generate_with};
