//! Configuration, types, and shared structures for goscii.
//!
//! This crate contains the pixel grid, glyph palette, ASCII result and
//! error types shared by the source, ascii and app crates.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::GlyphPalette;
pub use config::{Gamma, GenerateConfig};
pub use error::CoreError;
pub use frame::{AsciiResult, PixelGrid};
